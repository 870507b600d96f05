use core::ops::DerefMut;

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;

/// Mutex backed by `std::sync::Mutex` with `std`, or `spin::Mutex` without.
///
/// A poisoned std mutex is recovered: every critical section in this crate
/// installs a complete value in one assignment, so the data is never left
/// half-written.
pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::<T>::new(value))
    }

    #[cfg(feature = "std")]
    pub fn lock(&self) -> impl DerefMut<Target = T> + '_ {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> impl DerefMut<Target = T> + '_ {
        self.0.lock()
    }
}
