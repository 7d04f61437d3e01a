use anyhow::Result;
use clap::Parser;
use object_density::config::PipelineConfig;
use object_density::error::ModelError;
use object_density::model::{HttpCompletion, HttpDescriber};
use object_density::session::AnalysisSession;

/// Object density analysis over vision-language model descriptions:
/// - image input: a served VLM describes it, then the description is analyzed
/// - text input: a ready-made description is analyzed directly
#[derive(Parser, Debug)]
#[command(name = "odd")]
#[command(about = "Summarize the objects in an image as counts, density, and model-generated JSON")]
#[command(long_about = "Summarize the objects in an image as counts, density, and model-generated JSON.
Sends the image to a chat-completions endpoint for description, scans the description
for known object terms, computes the Object Density Descriptor (ODD), and asks the
model to restate the result as strict JSON.")]
struct Args {
    /// Image file to analyze (PNG or JPEG)
    #[arg(help = "Path to the image file to analyze", required_unless_present = "text")]
    image: Option<String>,

    /// Analyze this description text directly, skipping the vision model
    #[arg(short, long, help = "Use this description text instead of describing an image")]
    text: Option<String>,

    /// Chat-completions endpoint serving the model
    #[arg(short, long, default_value = "http://127.0.0.1:8080",
          help = "Base URL of the OpenAI-compatible model server")]
    endpoint: String,

    /// Model name sent with each request
    #[arg(short, long, default_value = "moondream2",
          help = "Model name to request from the server")]
    model: String,

    /// Area denominator for the density metric
    #[arg(short, long, default_value_t = 100.0,
          help = "Area constant dividing the object count (non-positive gives ODD 0)")]
    area: f64,

    /// Sampling temperature for the JSON summarization pass
    #[arg(long, default_value_t = 0.7,
          help = "Temperature for the summarization request (0.0 to 2.0)")]
    temperature: f32,

    /// Prompt used when asking the model to describe the image
    #[arg(short, long, help = "Custom description prompt for the vision model")]
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = PipelineConfig::new(args.endpoint, args.model, args.area);
    config.temperature = args.temperature;
    if let Some(prompt) = args.prompt {
        config.prompt = prompt;
    }
    config.validate().map_err(anyhow::Error::msg)?;

    let describer =
        HttpDescriber::new(&config.endpoint, &config.model)?.with_prompt(config.prompt.clone());
    let completion = HttpCompletion::new(&config.endpoint, &config.model)?;

    let session = AnalysisSession::builder()
        .with_describer(Box::new(describer))
        .with_completion(Box::new(completion))
        .with_config(config)
        .build()?;

    let result = match (&args.text, &args.image) {
        (Some(text), _) => session.analyze_description(text).await,
        (None, Some(path)) => {
            let image = std::fs::read(path)
                .map_err(|e| anyhow::anyhow!("Failed to read image file {path}: {e}"))?;
            session.analyze_image(&image).await
        }
        (None, None) => unreachable!("clap requires either an image path or --text"),
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            if let Some(model_err) = err.downcast_ref::<ModelError>() {
                if model_err.is_retryable() {
                    eprintln!("The request may succeed if retried.");
                }
            }
            return Err(err);
        }
    };

    println!("Description:\n{}\n", outcome.description);
    println!("Objects Detected: {}", outcome.summary.objects.join(", "));
    println!("Object Count: {}", outcome.summary.object_count);
    println!("ODD: {}", outcome.summary.odd);
    println!(
        "\nModel JSON Response:\n{}",
        serde_json::to_string_pretty(&outcome.json_summary)?
    );

    Ok(())
}
