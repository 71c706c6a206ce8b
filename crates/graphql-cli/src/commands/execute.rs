use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecuteCmd {
    #[arg(help = "Path to a schema SDL file.", long)]
    schema: PathBuf,

    #[arg(help = "Path to a GraphQL operation document.", name = "FILE")]
    file_path: PathBuf,

    #[arg(help = "Operation name to run, when the document defines more than one.", long)]
    operation_name: Option<String>,

    #[arg(help = "Path to a JSON file of variable values.", long)]
    variables: Option<PathBuf>,

    #[arg(help = "Path to a JSON file used as the root value (defaults to null).", long)]
    root_value: Option<PathBuf>,
}

fn read_json(path: &PathBuf) -> anyhow::Result<serde_json::Value> {
    let body = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&body)?)
}

#[inherent::inherent]
impl RunnableCommand for ExecuteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let sdl = match std::fs::read_to_string(&self.schema) {
            Ok(sdl) => sdl,
            Err(e) => return CommandResult::stderr(format_args!("{} Could not read schema {:?}: {e}", crate::output_utils::RED_X, self.schema)),
        };
        let query = match std::fs::read_to_string(&self.file_path) {
            Ok(query) => query,
            Err(e) => return CommandResult::stderr(format_args!("{} Could not read {:?}: {e}", crate::output_utils::RED_X, self.file_path)),
        };

        let schema = match graphql::build_schema(&sdl) {
            Ok(schema) => Arc::new(schema),
            Err(e) => return CommandResult::stderr(format_args!("{} Invalid schema: {e}", crate::output_utils::RED_X)),
        };

        let variables = match &self.variables {
            Some(path) => match read_json(path) {
                Ok(serde_json::Value::Object(map)) => Some(map),
                Ok(_) => return CommandResult::stderr(format_args!("{} --variables must contain a JSON object.", crate::output_utils::RED_X)),
                Err(e) => return CommandResult::stderr(format_args!("{} Could not read variables: {e}", crate::output_utils::RED_X)),
            },
            None => None,
        };

        let root_json = match &self.root_value {
            Some(path) => match read_json(path) {
                Ok(json) => json,
                Err(e) => return CommandResult::stderr(format_args!("{} Could not read root value: {e}", crate::output_utils::RED_X)),
            },
            None => serde_json::Value::Null,
        };
        let root_value: graphql_types::AnyValue = Arc::new(graphql_value::json_to_value(&root_json));
        let context_value: graphql_types::AnyValue = Arc::new(());

        let result = graphql::graphql(schema, query, self.operation_name.as_deref(), variables.as_ref(), root_value, context_value).await;

        let mut response = serde_json::Map::new();
        if let Some(data) = &result.data {
            response.insert("data".to_string(), graphql_value::value_to_json(data));
        }
        if !result.errors.is_empty() {
            response.insert(
                "errors".to_string(),
                serde_json::Value::Array(
                    result
                        .errors
                        .iter()
                        .map(|e| {
                            serde_json::json!({
                                "message": e.message,
                                "locations": e.locations.iter().map(|l| serde_json::json!({"line": l.line, "column": l.column})).collect::<Vec<_>>(),
                            })
                        })
                        .collect(),
                ),
            );
        }

        let rendered = serde_json::to_string_pretty(&response).unwrap_or_default();
        if result.data.is_none() && !result.errors.is_empty() {
            CommandResult::stderr(format_args!("{rendered}"))
        } else {
            CommandResult::ok(format_args!("{rendered}"))
        }
    }
}
