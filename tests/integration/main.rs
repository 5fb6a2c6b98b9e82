#[path = "../fixtures/mod.rs"]
mod fixtures;

mod test_alias_commands;
mod test_do_command;
