//! langsniff - 오프라인 언어 감지 CLI

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use langsniff::config::{load_config, load_config_from, LangsniffConfig};
use langsniff::{DetectionPipeline, Language, LanguageScorer, Translator};

/// 명령줄 인자
#[derive(Parser, Debug)]
#[command(name = "langsniff", about = "Guesses the language of short texts offline")]
struct Args {
    /// Text to inspect. Reads one text per line from stdin when omitted.
    text: Option<String>,

    /// Configuration file (JSON). Defaults to ~/.config/langsniff/config.json.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prints the per-language score vector.
    #[arg(short, long)]
    scores: bool,

    /// Prints the detection as JSON.
    #[arg(short, long)]
    json: bool,

    /// Translates through the offline fallback chain into this language.
    #[arg(short, long)]
    to: Option<Language>,
}

/// 한 줄 처리에 필요한 구성 요소
struct Runner {
    pipeline: DetectionPipeline,
    translator: Translator,
    args: Args,
}

impl Runner {
    fn new(args: Args, config: LangsniffConfig) -> Self {
        let scorer = LanguageScorer::new(config.weights);
        Self {
            pipeline: DetectionPipeline::local(scorer, config.policy),
            translator: Translator::new(scorer),
            args,
        }
    }

    fn run_line<W: Write>(&self, text: &str, out: &mut W) -> io::Result<()> {
        let detection = self.pipeline.detect(text);

        if self.args.json {
            let json = serde_json::to_string(&detection).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        } else {
            writeln!(out, "{}", detection.language)?;
        }

        if self.args.scores {
            writeln!(out, "  {}", self.pipeline.scorer().score(text))?;
        }

        if let Some(target) = self.args.to {
            let translation = self.translator.translate(text, Some(detection.language), target);
            writeln!(out, "  {} [{}]", translation.text, translation.method)?;
        }

        Ok(())
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // 설정 로드
    let config = match &args.config {
        Some(path) => match load_config_from(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("설정 로드 실패: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => load_config(),
    };

    let text = args.text.clone();
    let runner = Runner::new(args, config);
    let mut out = BufWriter::new(io::stdout().lock());

    let result = match text {
        Some(text) => runner.run_line(&text, &mut out),
        None => io::stdin()
            .lock()
            .lines()
            .try_for_each(|line| runner.run_line(&line?, &mut out)),
    };

    if let Err(e) = result.and_then(|_| out.flush()) {
        log::error!("출력 실패: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
