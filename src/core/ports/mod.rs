mod cancellation_signal;
mod input_injector;
mod pointer_position_provider;
mod screen_capturer;
mod sequence_recovery;

pub use cancellation_signal::CancellationSignal;
pub use input_injector::InputInjector;
pub use pointer_position_provider::PointerPositionProvider;
pub use screen_capturer::ScreenCapturer;
pub use sequence_recovery::SequenceRecovery;
