pub(crate) mod drn;
