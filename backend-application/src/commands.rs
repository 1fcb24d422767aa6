pub mod webhook_commands;
