use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use hoppman::config::{ConfigLoader, HoppmanConfig};
use hoppman::utils::{
    CollectionFormatter, CollectionSummary, OutputFormat, output_file_name, variables_table,
};
use hoppman::variable::VariableRewriter;
use hoppman::{Converter, SourceDocument};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// 标准输入/输出的占位参数
const STDIO: &str = "-";

#[derive(Parser)]
#[command(author, version, about = "Convert Hoppscotch collections into Postman collections", long_about = None)]
pub struct Cli {
    /// 配置文件路径（默认自动查找 hoppman.toml）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 把 Hoppscotch 集合转换为 Postman v2.1 集合
    Convert(ConvertArgs),

    /// 列出集合中用到的 <<变量>>
    Vars {
        /// 输入文件，`-` 表示标准输入
        #[arg(default_value = STDIO)]
        input: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// 输入文件，`-` 表示标准输入
    #[arg(default_value = STDIO)]
    pub input: String,

    /// 输出文件路径
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出目录，文件名为 {name}.postman_collection.json
    #[arg(long, conflicts_with = "output")]
    pub out_dir: Option<PathBuf>,

    /// 直接输出到 stdout
    #[arg(long, conflicts_with_all = ["output", "out_dir"])]
    pub stdout: bool,

    /// JSON 缩进空格数
    #[arg(long, conflicts_with = "compact")]
    pub indent: Option<usize>,

    /// 单行输出
    #[arg(long)]
    pub compact: bool,

    /// 覆盖已存在的文件，不再询问
    #[arg(short, long)]
    pub force: bool,

    /// 不打印转换摘要
    #[arg(short, long)]
    pub quiet: bool,
}

/// 输出位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl ConvertArgs {
    fn output_format(&self, config: &HoppmanConfig) -> OutputFormat {
        if self.compact {
            OutputFormat::Compact
        } else {
            OutputFormat::Pretty(self.indent.unwrap_or(config.output.indent))
        }
    }

    /// 决定输出位置
    ///
    /// 未指定 -o / --out-dir 时：从 stdin 读取则写 stdout，否则写到配置目录（默认当前目录）
    pub fn destination(&self, config: &HoppmanConfig, collection_name: Option<&str>) -> Destination {
        if self.stdout {
            return Destination::Stdout;
        }
        if let Some(output) = &self.output {
            return if output.as_os_str() == STDIO {
                Destination::Stdout
            } else {
                Destination::File(output.clone())
            };
        }

        let dir = match (&self.out_dir, &config.output.dir) {
            (Some(dir), _) => dir.clone(),
            (None, _) if self.input == STDIO => return Destination::Stdout,
            (None, Some(dir)) => dir.clone(),
            (None, None) => PathBuf::from("."),
        };
        Destination::File(dir.join(output_file_name(collection_name)))
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == STDIO {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}

/// 目标文件已存在时是否覆盖
fn confirm_overwrite(path: &Path, force: bool) -> Result<bool> {
    if force || !path.exists() {
        return Ok(true);
    }

    // 非交互环境下不覆盖
    if !std::io::stdin().is_terminal() {
        return Ok(false);
    }

    let answer = inquire::Confirm::new(&format!("{} already exists. Overwrite?", path.display()))
        .with_default(false)
        .prompt()
        .context("Failed to read confirmation")?;
    Ok(answer)
}

fn run_convert(args: &ConvertArgs, config: &HoppmanConfig) -> Result<Option<PathBuf>> {
    let content = read_input(&args.input)?;

    let converter = Converter::new(config.convert.clone());
    let (document, collection) = converter.convert_str(&content)?;

    let text = CollectionFormatter::new(args.output_format(config)).format(&collection)?;

    let written = match args.destination(config, document.name()) {
        Destination::Stdout => {
            println!("{}", text);
            None
        }
        Destination::File(path) => {
            if !confirm_overwrite(&path, args.force)? {
                bail!("Refusing to overwrite {} (use --force)", path.display());
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, format!("{}\n", text))
                .with_context(|| format!("Failed to write {}", path.display()))?;

            eprintln!(
                "{} {} {} {}",
                "✓".green(),
                collection.info.name.bold(),
                "→".dimmed(),
                path.display().to_string().cyan()
            );
            Some(path)
        }
    };

    if !args.quiet {
        eprintln!("{}", CollectionSummary::from_collection(&collection).to_table());
    }

    Ok(written)
}

fn run_vars(input: &str) -> Result<()> {
    let content = read_input(input)?;
    let document = SourceDocument::parse(&content)?;
    let names = VariableRewriter::extract_from_value(document.raw());

    if names.is_empty() {
        println!("{}", "No variables found".dimmed());
    } else {
        println!("{}", variables_table(names.iter().map(String::as_str)));
    }
    Ok(())
}

/// 面向用户的错误提示（只输出一次，详细原因见日志）
pub fn error_message(err: &anyhow::Error) -> String {
    format!("{} {}", "✗".red(), format!("{:#}", err).red())
}

pub fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert(args) => run_convert(&args, &config).map(|_| ()),
        Commands::Vars { input } => run_vars(&input),
    }
}
