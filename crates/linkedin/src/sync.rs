//! Mutex shim so the clients read the same in async and sync builds: `lock`
//! is awaited in the former and `maybe_async` strips the `.await` in the
//! latter. Neither flavour reports poisoning.

#[cfg(not(feature = "__sync"))]
pub use self::futures_mutex::{Mutex, MutexGuard};

#[cfg(feature = "__sync")]
pub use self::std_mutex::{Mutex, MutexGuard};

#[cfg(not(feature = "__sync"))]
mod futures_mutex {
    pub use futures::lock::MutexGuard;

    #[derive(Debug, Default)]
    pub struct Mutex<T: ?Sized>(futures::lock::Mutex<T>);

    impl<T> Mutex<T> {
        pub fn new(val: T) -> Self {
            Self(futures::lock::Mutex::new(val))
        }
    }

    impl<T: ?Sized> Mutex<T> {
        pub async fn lock(&self) -> MutexGuard<'_, T> {
            self.0.lock().await
        }
    }
}

#[cfg(feature = "__sync")]
mod std_mutex {
    use std::sync::PoisonError;

    pub use std::sync::MutexGuard;

    #[derive(Debug, Default)]
    pub struct Mutex<T: ?Sized>(std::sync::Mutex<T>);

    impl<T> Mutex<T> {
        pub fn new(val: T) -> Self {
            Self(std::sync::Mutex::new(val))
        }
    }

    impl<T: ?Sized> Mutex<T> {
        pub fn lock(&self) -> MutexGuard<'_, T> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }
}
