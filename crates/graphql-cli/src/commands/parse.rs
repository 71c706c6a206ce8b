use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_lang::parser::ParseOptions;
use graphql_lang::Source;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(help = "Path to a GraphQL document (query/mutation/subscription, not SDL).", name = "FILE")]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let body = match std::fs::read_to_string(&self.file_path) {
            Ok(body) => body,
            Err(e) => return CommandResult::stderr(format_args!("{} Could not read {:?}: {e}", crate::output_utils::RED_X, self.file_path)),
        };

        let source = Source::named(body, self.file_path.display().to_string());
        match graphql::parse(&source, ParseOptions::default()) {
            Ok(document) => CommandResult::ok(format_args!(
                "{} Parsed successfully: {} definition(s).",
                crate::output_utils::GREEN_CHECK,
                document.definitions.len(),
            )),
            Err(e) => CommandResult::stderr(format_args!("{} Syntax error: {e}", crate::output_utils::RED_X)),
        }
    }
}
