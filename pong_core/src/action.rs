use serde::{Deserialize, Serialize};

use crate::error::EnvError;

/// Discrete paddle command for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Action {
    #[default]
    Hold = 0,
    Up = 1,
    Down = 2,
}

impl Action {
    pub const COUNT: usize = 3;
    pub const ALL: [Action; Self::COUNT] = [Action::Hold, Action::Up, Action::Down];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Vertical direction: -1 = up, 0 = hold, 1 = down
    pub fn dir(self) -> f32 {
        match self {
            Action::Hold => 0.0,
            Action::Up => -1.0,
            Action::Down => 1.0,
        }
    }
}

impl TryFrom<i64> for Action {
    type Error = EnvError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Hold),
            1 => Ok(Action::Up),
            2 => Ok(Action::Down),
            other => Err(EnvError::InvalidAction(other)),
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = EnvError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Action::try_from(i64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_valid_ints() {
        for (i, expected) in Action::ALL.iter().enumerate() {
            let action = Action::try_from(i as i64).unwrap();
            assert_eq!(action, *expected);
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn test_action_rejects_out_of_range() {
        assert_eq!(Action::try_from(3i64), Err(EnvError::InvalidAction(3)));
        assert_eq!(Action::try_from(-1i64), Err(EnvError::InvalidAction(-1)));
        assert_eq!(Action::try_from(255u8), Err(EnvError::InvalidAction(255)));
    }

    #[test]
    fn test_action_dir() {
        assert_eq!(Action::Hold.dir(), 0.0);
        assert_eq!(Action::Up.dir(), -1.0);
        assert_eq!(Action::Down.dir(), 1.0);
    }
}
