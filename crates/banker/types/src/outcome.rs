use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of arbitrating one request.
///
/// `Fail` and `Wait` are policy rejections, not errors: the state is left
/// exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Outcome {
    /// The task asked for more than its declared need
    Fail = 0,
    /// Not grantable now: resources are busy or granting would be unsafe
    Wait = 1,
    /// Granted; the state now reflects the allocation
    Success = 2,
}

impl Outcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Fail => "FAIL",
            Outcome::Wait => "WAIT",
            Outcome::Success => "SUCCESS",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
