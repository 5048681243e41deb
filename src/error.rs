//! Error type for the edges of the cluster.
//!
//! The update and render paths are infallible. Errors only arise when a
//! [`Session`](crate::state::Session) is built from explicit numbers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// A session value lies outside its range.
    #[error("{field} = {value} is out of range (max {max})")]
    OutOfRange { field: &'static str, value: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = ClusterError::OutOfRange { field: "speed", value: 240, max: 239 };
        assert_eq!(err.to_string(), "speed = 240 is out of range (max 239)");
    }
}
