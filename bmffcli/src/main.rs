use anyhow::Result;
use structopt::StructOpt;

use bmfflib::io::Mp4File;
use bmfflib::mp4box::MP4;
use bmfflib::track;

#[derive(StructOpt, Debug)]
#[structopt(setting = clap::AppSettings::VersionlessSubcommands)]
pub struct MainOpts {
    #[structopt(long)]
    /// Log options (like RUST_LOG; trace, debug, info etc)
    pub log: Option<String>,
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub enum Command {
    #[structopt(display_order = 1)]
    /// Media information.
    Mediainfo(MediainfoOpts),

    #[structopt(display_order = 2)]
    /// Show the boxes.
    Boxes(BoxesOpts),
}

#[derive(StructOpt, Debug)]
pub struct MediainfoOpts {
    #[structopt(short, long)]
    /// Output in JSON.
    pub json: bool,

    /// Input filename.
    pub input: String,
}

#[derive(StructOpt, Debug)]
pub struct BoxesOpts {
    /// Input filename.
    pub input: String,
}

fn main() -> Result<()> {
    let opts = MainOpts::from_args();

    let mut builder = env_logger::Builder::new();
    builder.parse_filters(opts.log.as_deref().unwrap_or("info"));
    builder.init();

    match opts.cmd {
        Command::Mediainfo(opts) => mediainfo(opts),
        Command::Boxes(opts) => boxes(opts),
    }
}

fn mediainfo(opts: MediainfoOpts) -> Result<()> {
    let reader = Mp4File::open(&opts.input)?;
    let mp4 = MP4::read(reader)?;

    let info = track::track_info(&mp4);
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{:#?}", info);
    }
    Ok(())
}

fn boxes(opts: BoxesOpts) -> Result<()> {
    let reader = Mp4File::open(&opts.input)?;
    let mp4 = MP4::read(reader)?;
    println!("{:#?}", mp4.boxes);
    Ok(())
}
