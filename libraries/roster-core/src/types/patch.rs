/// Field presence tag for partial updates

/// A single updatable attribute in a partial update.
///
/// `Absent` means the caller did not mention the field and the stored value
/// must stay as it is. `Present` carries the new value, even when that value
/// is an empty string. For nullable columns use `Patch<Option<T>>`, where
/// `Present(None)` clears the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Patch<T> {
    /// Field was not supplied
    #[default]
    Absent,
    /// Field was supplied with this value
    Present(T),
}

impl<T> Patch<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Return the supplied value or the current one
    pub fn apply(self, current: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => current,
        }
    }
}
