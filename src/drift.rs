pub(crate) mod marquee;
