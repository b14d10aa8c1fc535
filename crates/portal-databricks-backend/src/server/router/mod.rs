pub(super) mod workspace;
