pub(crate) mod smoother;
