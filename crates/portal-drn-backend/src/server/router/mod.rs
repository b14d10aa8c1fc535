pub(super) mod drn;
