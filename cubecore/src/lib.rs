//! cubecore — core library for the cube timer
//!
//! Holds everything that is not a pixel: the stopwatch with its background
//! ticker thread, the scramble generator, the append-only solve log, and
//! the remembered preferences.

pub mod clock;
pub mod prefs;
pub mod record;
pub mod scramble;

pub use clock::{format_elapsed, Clock};
pub use record::{RecordError, Recorder};
pub use scramble::Scrambler;
