use bufvec::{BufVecError, Buffer, GrowthFactor, Vector};

#[test]
fn test_at_returns_last_written_value() {
    let mut buffer = Buffer::new(5).unwrap();
    for i in 0..5 {
        buffer.push_back(i * 10).unwrap();
    }

    buffer.set(2, 99).unwrap();
    buffer.insert_at(0, -1).unwrap_err();
    *buffer.at_mut(4).unwrap() = 7;

    assert_eq!(buffer.at(0), Ok(&0));
    assert_eq!(buffer.at(2), Ok(&99));
    assert_eq!(buffer.at(4), Ok(&7));
}

#[test]
fn test_insert_then_remove_round_trip() {
    let mut vector = Vector::new(3).unwrap();
    for word in ["alpha", "beta", "gamma"] {
        vector.push_back(word).unwrap();
    }

    for pos in 0..=vector.len() {
        vector.insert_at(pos, "inserted").unwrap();
        assert_eq!(vector.at(pos), Ok(&"inserted"));
        assert_eq!(vector.remove_at(pos), Ok("inserted"));
        assert_eq!(vector.as_slice(), &["alpha", "beta", "gamma"]);
    }
}

#[test]
fn test_insert_shifts_right_and_remove_shifts_left() {
    let mut buffer = Buffer::new(8).unwrap();
    for byte in *b"abde" {
        buffer.push_back(byte).unwrap();
    }

    buffer.insert_at(2, b'c').unwrap();
    assert_eq!(buffer.as_slice(), b"abcde");

    buffer.remove_at(0).unwrap();
    assert_eq!(buffer.as_slice(), b"bcde");
}

#[test]
fn test_reserve_is_monotonic() {
    let mut buffer = Buffer::<u32>::new(4).unwrap();

    buffer.reserve(4).unwrap();
    assert_eq!(buffer.capacity(), 4);

    buffer.reserve(9).unwrap();
    assert_eq!(buffer.capacity(), 9);

    assert!(matches!(
        buffer.reserve(8),
        Err(BufVecError::InvalidArgument { .. })
    ));
    assert_eq!(buffer.capacity(), 9);
}

#[test]
fn test_reserve_then_insert_into_full_buffer() {
    let mut buffer = Buffer::new(1).unwrap();
    buffer.push_back(1).unwrap();
    assert!(buffer.push_back(2).is_err());

    buffer.reserve(2).unwrap();
    buffer.push_back(2).unwrap();
    assert_eq!(buffer.as_slice(), &[1, 2]);
}

#[test]
fn test_shrink_to_fit() {
    let mut vector = Vector::new(32).unwrap();
    vector.push_back(1.5f64).unwrap();
    vector.push_back(2.5).unwrap();

    vector.shrink_to_fit().unwrap();

    assert_eq!(vector.capacity(), 2);
    assert_eq!(vector.as_slice(), &[1.5, 2.5]);
}

#[test_log::test]
fn test_vector_push_never_exceeds_capacity() {
    let mut vector = Vector::new(1).unwrap();

    for i in 0..10_000u32 {
        vector.push_back(i).unwrap();
        assert!(vector.len() <= vector.capacity());
    }

    assert_eq!(vector.len(), 10_000);
    assert!(vector.iter().copied().eq(0..10_000));
}

#[test_log::test]
fn test_vector_insert_at_front_while_growing() {
    let growth = GrowthFactor::SEVEN_QUARTERS;
    let mut vector = Vector::with_growth(2, growth).unwrap();

    for i in 0..20 {
        vector.insert_at(0, i).unwrap();
    }

    let expected: Vec<i32> = (0..20).rev().collect();
    assert_eq!(vector.as_slice(), expected.as_slice());
}

#[test]
fn test_into_buffer_stops_growing() {
    let mut vector = Vector::new(1).unwrap();
    vector.push_back('a').unwrap();

    let mut buffer = vector.into_buffer();
    assert_eq!(
        buffer.push_back('b'),
        Err(BufVecError::CapacityExceeded { capacity: 1 })
    );
}

#[test]
fn test_element_size_is_fixed() {
    let vector = Vector::<[u8; 12]>::new(3).unwrap();
    assert_eq!(vector.element_size(), 12);

    let buffer = Buffer::<u64>::new(3).unwrap();
    assert_eq!(buffer.element_size(), 8);
}

#[test]
fn test_destroy_releases() {
    let mut vector = Vector::new(2).unwrap();
    vector.push_back(String::from("owned")).unwrap();
    vector.destroy();
}
