// src/config.rs
use crate::constants::{
    ACCESS_TOKEN_ENV_VAR, API_MAX_PAGE_SIZE, DEFAULT_DOCUMENT_TYPE, DEFAULT_OUT_DIR,
    DEFAULT_PAGE_SIZE, DEFAULT_PREBUILT_POSTS, ENDPOINT_ENV_VAR,
};
use crate::error::AppError;
use crate::types::{AccessToken, ApiEndpoint, DocumentType, PostUid, ValidationError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about = "Static blog generator backed by a Prismic repository", long_about = None)]
pub struct CommandLineInput {
    /// Content API endpoint, e.g. "https://my-repo.cdn.prismic.io/api/v2"
    #[arg(long, global = true, env = ENDPOINT_ENV_VAR)]
    pub endpoint: Option<String>,

    /// Custom type holding the posts
    #[arg(long, global = true, default_value = DEFAULT_DOCUMENT_TYPE)]
    pub document_type: String,

    /// Posts per listing page
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Directory with home.hbs, post.hbs and partials/header.hbs overriding the built-in templates
    #[arg(long, global = true)]
    pub template_dir: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the listing page and prebuilt post pages into a directory
    Build {
        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Extra listing pages appended before rendering the home page
        #[arg(long, default_value_t = 0)]
        preload_pages: u32,

        /// Post uid to render ahead of time (repeatable)
        #[arg(long = "prebuild", value_name = "UID")]
        prebuild: Vec<String>,

        /// Render every post in the repository
        #[arg(long, default_value_t = false, conflicts_with = "prebuild")]
        prebuild_all: bool,
    },

    /// Print the listing as JSON
    List {
        /// Pages appended after the first one
        #[arg(long, default_value_t = 0)]
        more: u32,
    },

    /// Print one post as JSON, or as a rendered page with --html
    Post {
        uid: String,

        #[arg(long, default_value_t = false)]
        html: bool,
    },
}

/// Which posts get a page in the static build.
#[derive(Debug, Clone, PartialEq)]
pub enum PrebuildPolicy {
    Listed(Vec<PostUid>),
    All,
}

impl Default for PrebuildPolicy {
    fn default() -> Self {
        PrebuildPolicy::Listed(
            DEFAULT_PREBUILT_POSTS
                .iter()
                .filter_map(|uid| PostUid::parse(uid).ok())
                .collect(),
        )
    }
}

/// Settings of the `build` command.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSettings {
    pub out_dir: PathBuf,
    pub preload_pages: u32,
    pub prebuild: PrebuildPolicy,
}

/// A command with validated arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteCommand {
    Build(BuildSettings),
    List { more: u32 },
    Post { uid: PostUid, html: bool },
}

/// Resolved configuration, validated and ready to drive a command.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub endpoint: ApiEndpoint,
    pub access_token: Option<AccessToken>,
    pub document_type: DocumentType,
    pub page_size: u32,
    pub template_dir: Option<PathBuf>,
    pub verbose: bool,
    pub command: SiteCommand,
}

impl SiteConfig {
    /// Resolves configuration from CLI input and the environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let token = std::env::var(ACCESS_TOKEN_ENV_VAR).ok();
        Self::resolve_with_token(cli, token)
    }

    /// Same as [`SiteConfig::resolve`] with the access token passed in.
    pub fn resolve_with_token(
        cli: CommandLineInput,
        access_token: Option<String>,
    ) -> Result<Self, AppError> {
        let endpoint = cli.endpoint.as_deref().ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "no content API endpoint: pass --endpoint or set {}",
                ENDPOINT_ENV_VAR
            ))
        })?;
        let endpoint = ApiEndpoint::parse(endpoint)?;

        let access_token = access_token
            .filter(|t| !t.trim().is_empty())
            .map(AccessToken::new)
            .transpose()?;

        let document_type = DocumentType::new(cli.document_type)?;
        let page_size = validate_page_size(cli.page_size)?;

        let command = match cli.command {
            Command::Build {
                out_dir,
                preload_pages,
                prebuild,
                prebuild_all,
            } => {
                let prebuild = if prebuild_all {
                    PrebuildPolicy::All
                } else if prebuild.is_empty() {
                    PrebuildPolicy::default()
                } else {
                    PrebuildPolicy::Listed(
                        prebuild
                            .iter()
                            .map(|uid| PostUid::parse(uid))
                            .collect::<Result<_, _>>()?,
                    )
                };
                SiteCommand::Build(BuildSettings {
                    out_dir,
                    preload_pages,
                    prebuild,
                })
            }
            Command::List { more } => SiteCommand::List { more },
            Command::Post { uid, html } => SiteCommand::Post {
                uid: PostUid::parse(&uid)?,
                html,
            },
        };

        Ok(SiteConfig {
            endpoint,
            access_token,
            document_type,
            page_size,
            template_dir: cli.template_dir,
            verbose: cli.verbose,
            command,
        })
    }
}

fn validate_page_size(page_size: u32) -> Result<u32, ValidationError> {
    if (1..=API_MAX_PAGE_SIZE).contains(&page_size) {
        Ok(page_size)
    } else {
        Err(ValidationError::OutOfBounds {
            value: page_size,
            min: 1,
            max: API_MAX_PAGE_SIZE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ENDPOINT: &str = "https://spacetraveling.cdn.prismic.io/api/v2";

    fn parse(args: &[&str]) -> CommandLineInput {
        CommandLineInput::try_parse_from(
            std::iter::once("spacetraveling").chain(args.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn test_build_defaults() {
        let cli = parse(&["--endpoint", ENDPOINT, "build"]);
        let config = SiteConfig::resolve_with_token(cli, None).unwrap();

        assert_eq!(config.document_type.as_str(), "publication");
        assert_eq!(config.page_size, 1);
        assert!(config.access_token.is_none());
        assert_eq!(
            config.command,
            SiteCommand::Build(BuildSettings {
                out_dir: PathBuf::from("public"),
                preload_pages: 0,
                prebuild: PrebuildPolicy::Listed(vec![
                    PostUid::parse("como-utilizar-hooks").unwrap(),
                    PostUid::parse("criando-um-app-cra-do-zero").unwrap(),
                ]),
            })
        );
    }

    #[test]
    fn test_build_prebuild_all() {
        let cli = parse(&["--endpoint", ENDPOINT, "build", "--prebuild-all", "--preload-pages", "2"]);
        let config = SiteConfig::resolve_with_token(cli, None).unwrap();

        match config.command {
            SiteCommand::Build(settings) => {
                assert_eq!(settings.prebuild, PrebuildPolicy::All);
                assert_eq!(settings.preload_pages, 2);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["post", "como-utilizar-hooks", "--endpoint", ENDPOINT, "--page-size", "5"]);
        let config = SiteConfig::resolve_with_token(cli, Some("token-123".to_string())).unwrap();

        assert_eq!(config.page_size, 5);
        assert_eq!(config.access_token.unwrap().as_str(), "token-123");
        assert_eq!(
            config.command,
            SiteCommand::Post {
                uid: PostUid::parse("como-utilizar-hooks").unwrap(),
                html: false,
            }
        );
    }

    #[test]
    fn test_page_size_out_of_bounds() {
        let cli = parse(&["--endpoint", ENDPOINT, "--page-size", "0", "list"]);
        let err = SiteConfig::resolve_with_token(cli, None).unwrap_err();
        assert!(matches!(
            err,
            AppError::ValidationError(ValidationError::OutOfBounds { value: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_uid_rejected() {
        let cli = parse(&["--endpoint", ENDPOINT, "post", "../etc"]);
        assert!(SiteConfig::resolve_with_token(cli, None).is_err());
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let cli = parse(&["--endpoint", ENDPOINT, "list"]);
        let config = SiteConfig::resolve_with_token(cli, Some("  ".to_string())).unwrap();
        assert!(config.access_token.is_none());
    }
}
