mod future_ext;
mod into_resolution;
