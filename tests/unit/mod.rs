//! Unit tests mirroring the `src/` tree file for file
