mod collect;
mod validate;

use crate::Cli;
use crate::CommandResult;
use collect::CollectCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-collect")]
pub(crate) enum CommandEnum {
    /// Collect the fields (and `@defer` patches) an operation selects.
    Collect(Box<CollectCmd>),

    /// Check the fragments of GraphQL executable documents.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Collect(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
