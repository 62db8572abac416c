use crate::error::LookupError;

/// Maximum number of names `GetParameters` accepts in one call.
pub const GET_PARAMETERS_BATCH_LIMIT: usize = 10;

/// Splits `values` into consecutive chunks of at most `batch_size` items.
///
/// An empty input still yields one (empty) chunk.
pub fn make_batches<T: Clone>(values: &[T], batch_size: usize) -> Result<Vec<Vec<T>>, LookupError> {
    if batch_size < 1 {
        return Err(LookupError::InvalidArgument(
            "batch size must be greater than 0".to_string(),
        ));
    }

    if values.is_empty() {
        return Ok(vec![Vec::new()]);
    }

    Ok(values.chunks(batch_size).map(<[T]>::to_vec).collect())
}
