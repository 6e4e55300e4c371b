/// Module errors are typed with thiserror and carried through anyhow from there on
pub type Result<T = ()> = anyhow::Result<T>;
