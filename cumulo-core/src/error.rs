//! Error types for the Cumulo core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running a [`crate::Detector`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CumuloError {
    /// The neighbourhood radius must be finite and strictly positive.
    #[error("radius must be a finite positive number (got {got})")]
    InvalidRadius {
        /// The invalid radius supplied by the caller.
        got: f64,
    },
    /// The minimum neighbourhood population must be greater than zero.
    #[error("min_points must be at least 1 (got {got})")]
    InvalidMinPoints {
        /// The invalid minimum supplied by the caller.
        got: usize,
    },
    /// The point cloud contained a NaN or infinite coordinate.
    #[error("point cloud `{cloud}` has a non-finite coordinate at point {index}")]
    NonFiniteCoordinate {
        /// Name of the offending cloud.
        cloud: Arc<str>,
        /// Zero-based index of the offending point.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`CumuloError`] variants.
    enum CumuloErrorCode for CumuloError {
        /// The neighbourhood radius must be finite and strictly positive.
        InvalidRadius => InvalidRadius { .. } => "CUMULO_INVALID_RADIUS",
        /// The minimum neighbourhood population must be greater than zero.
        InvalidMinPoints => InvalidMinPoints { .. } => "CUMULO_INVALID_MIN_POINTS",
        /// The point cloud contained a NaN or infinite coordinate.
        NonFiniteCoordinate => NonFiniteCoordinate { .. } => "CUMULO_NON_FINITE_COORDINATE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, CumuloError>;
