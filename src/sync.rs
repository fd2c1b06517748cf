//! Lock shim: `std::sync::Mutex` with `std`, `spin::Mutex` otherwise.
//!
//! Both expose `lock()` returning a guard directly, so the game code is
//! identical under either feature set.

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;
