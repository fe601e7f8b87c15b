use clap::Parser;
use std::path::PathBuf;

/// convect1d demo executable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory for output files, will be created.
    /// WARNING, if this Directory
    /// already exists, current contents will be removed.
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Chunk size to use for parallelism.
    #[arg(short, long, default_value = "100")]
    pub chunk_size: usize,

    /// Number of grid points.
    #[arg(short, long, default_value = "41")]
    pub points: usize,

    /// Number of time steps to take.
    #[arg(short = 'n', long, default_value = "25")]
    pub steps: usize,

    /// Time step size.
    #[arg(long, default_value = "0.025")]
    pub dt: f64,

    /// Wave speed.
    #[arg(long, default_value = "1.0")]
    pub wave_speed: f64,

    /// Start from the Gaussian bump profile instead of the
    /// square wave.
    #[arg(long)]
    pub normal_ic: bool,

    /// Also write the stacked time-history image,
    /// one line per time level.
    #[arg(short, long)]
    pub write_history: bool,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,
}

impl Args {
    pub fn cli_parse(name: &str) -> Self {
        println!("DEMO: {}", name);
        let args = Args::parse();

        let output_dir = args.output_dir.to_str().unwrap();
        let _ = std::fs::remove_dir_all(output_dir);
        std::fs::create_dir(output_dir).unwrap();

        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .unwrap();

        args
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        let mut path = self.output_dir.clone();
        path.push(file_name);
        path
    }
}
