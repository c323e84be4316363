//! Keys a map can be probed with.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A value that may be used to look up an entry.
///
/// Only text can name an entry. Probing with anything else is allowed and
/// simply finds nothing, without a round trip to the store.
pub trait Lookup {
    /// The key text, or `None` if this value can never be a key.
    fn as_key(&self) -> Option<&str>;
}

impl Lookup for str {
    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl Lookup for String {
    fn as_key(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Lookup for Cow<'_, str> {
    fn as_key(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn as_key(&self) -> Option<&str> {
        (**self).as_key()
    }
}

impl<T: Lookup + ?Sized> Lookup for Box<T> {
    fn as_key(&self) -> Option<&str> {
        (**self).as_key()
    }
}

impl<T: Lookup + ?Sized> Lookup for Rc<T> {
    fn as_key(&self) -> Option<&str> {
        (**self).as_key()
    }
}

impl<T: Lookup + ?Sized> Lookup for Arc<T> {
    fn as_key(&self) -> Option<&str> {
        (**self).as_key()
    }
}

macro_rules! not_a_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Lookup for $ty {
                fn as_key(&self) -> Option<&str> {
                    None
                }
            }
        )*
    };
}

not_a_key!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    [u8], Vec<u8>,
);
