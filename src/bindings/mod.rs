//! FFI Facade: the `_core` Python module, built with `--features python`.
mod python;
