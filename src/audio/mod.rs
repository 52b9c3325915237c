pub mod audio_engine;
pub mod constants;
pub mod gain_stage;
pub mod transport;
