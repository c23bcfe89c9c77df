flat_mod!(error, class, handle, version);

/// OpenCL enumerants used by the wrappers, independent of the backend in use.
pub mod consts;
