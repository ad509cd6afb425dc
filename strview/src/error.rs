pub use bufvec::BufVecError as Error;

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn alloc_failure(requested: usize) -> Error {
    Error::AllocationFailure { requested }
}
