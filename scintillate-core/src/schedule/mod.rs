pub(crate) mod timers;
