use core::fmt;

pub enum CarryFlag {
    Set,
    Complement,
}

impl fmt::Display for CarryFlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Set => write!(f, "scf"),
            Self::Complement => write!(f, "ccf"),
        }
    }
}
