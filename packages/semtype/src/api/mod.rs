//! Public entry points that do not require holding a `Typeset` method chain

pub mod functional;

pub use functional::{
    cast_frame, cast_series, detect_frame_type, detect_series_type, infer_frame_type,
    infer_series_type,
};
