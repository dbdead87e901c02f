pub(crate) mod threshold;
