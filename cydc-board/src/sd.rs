//! SD card slot and its mount state.

use core::fmt::{self, Debug};

/// Where the card is mounted.
pub const MOUNT_POINT: &str = "/sd";

/// A filesystem able to mount the card.
pub trait SdMount {
    type Error: Debug;

    fn mount(&mut self, mount_point: &str) -> Result<(), Self::Error>;

    fn unmount(&mut self, mount_point: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdState {
    /// No card slot configured.
    Unavailable,
    /// Ready to mount.
    Ready,
    /// Mounted at [`MOUNT_POINT`]. Do not remove the card.
    Mounted,
}

pub enum SdError<TMOUNTERR> {
    /// The slot is not enabled.
    NotReady,
    /// The filesystem refused to mount the card.
    Mount(TMOUNTERR),
    /// The filesystem refused to unmount the card.
    Unmount(TMOUNTERR),
}

impl<TMOUNTERR: Debug> Debug for SdError<TMOUNTERR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "NotReady"),
            Self::Mount(err) => write!(f, "Mount({err:?})"),
            Self::Unmount(err) => write!(f, "Unmount({err:?})"),
        }
    }
}

pub struct SdCard<M> {
    fs: M,
    state: SdState,
}

impl<M: SdMount> SdCard<M> {
    /// A slot that is [`SdState::Ready`] when `enabled`, otherwise unavailable.
    pub fn new(fs: M, enabled: bool) -> Self {
        let state = if enabled {
            SdState::Ready
        } else {
            SdState::Unavailable
        };
        Self { fs, state }
    }

    pub fn state(&self) -> SdState {
        self.state
    }

    /// Mounts the card. Mounting a mounted card does nothing.
    pub fn mount(&mut self) -> Result<(), SdError<M::Error>> {
        match self.state {
            SdState::Unavailable => Err(SdError::NotReady),
            SdState::Mounted => Ok(()),
            SdState::Ready => {
                self.fs.mount(MOUNT_POINT).map_err(|err| {
                    log::warn!("Failed to mount SD card: {err:?}");
                    SdError::Mount(err)
                })?;
                self.state = SdState::Mounted;
                log::info!("SD card mounted at {MOUNT_POINT}");
                Ok(())
            }
        }
    }

    /// Unmounts the card if it is mounted.
    pub fn unmount(&mut self) -> Result<(), SdError<M::Error>> {
        if self.state != SdState::Mounted {
            return Ok(());
        }
        self.fs.unmount(MOUNT_POINT).map_err(|err| {
            log::warn!("Failed to unmount SD card: {err:?}");
            SdError::Unmount(err)
        })?;
        self.state = SdState::Ready;
        log::info!("SD card unmounted, safe to remove");
        Ok(())
    }
}
