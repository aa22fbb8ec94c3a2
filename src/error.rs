#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeqError {
    #[error("{operation} requires at least one item.")]
    EmptyCollection { operation: &'static str },

    #[error("{operation} requires `{parameter}` to be positive.")]
    NonPositive {
        operation: &'static str,
        parameter: &'static str,
    },

    #[error("{operation} requires `{parameter}` to be finite.")]
    NonFinite {
        operation: &'static str,
        parameter: &'static str,
    },
}

impl SeqError {
    pub fn empty_collection(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected empty collection");
        SeqError::EmptyCollection { operation }
    }

    pub fn non_positive(operation: &'static str, parameter: &'static str) -> Self {
        tracing::debug!(operation, parameter, "rejected non-positive argument");
        SeqError::NonPositive {
            operation,
            parameter,
        }
    }

    pub fn non_finite(operation: &'static str, parameter: &'static str) -> Self {
        tracing::debug!(operation, parameter, "rejected non-finite argument");
        SeqError::NonFinite {
            operation,
            parameter,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operation() {
        assert_eq!(
            SeqError::empty_collection("cycle").to_string(),
            "cycle requires at least one item."
        );
        assert_eq!(
            SeqError::non_positive("chunk", "size").to_string(),
            "chunk requires `size` to be positive."
        );
        assert_eq!(
            SeqError::non_finite("infinite_powers_f64", "base").to_string(),
            "infinite_powers_f64 requires `base` to be finite."
        );
    }
}
