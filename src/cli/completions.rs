use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    remok completions bash > ~/.bash_completion.d/remok\n\n\
                  Generate zsh completions:\n    remok completions zsh > ~/.zfunc/_remok\n\n\
                  Generate fish completions:\n    remok completions fish > ~/.config/fish/completions/remok.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}
