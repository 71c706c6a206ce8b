mod execute;
mod parse;
mod print;
mod validate;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use execute::ExecuteCmd;
use parse::ParseCmd;
use print::PrintCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlc")]
pub(crate) enum CommandEnum {
    Parse(ParseCmd),
    Print(PrintCmd),
    Validate(Box<ValidateCmd>),
    Execute(Box<ExecuteCmd>),
}

impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
            Self::Execute(cmd) => cmd.run(cli).await,
        }
    }
}
