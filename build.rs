use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::Path;

const FONT_PATH: &str = "assets/DejaVuSans.ttf";
const FONT_URL: &str = "https://github.com/dejavu-fonts/dejavu-fonts/releases/download/version_2_37/dejavu-fonts-ttf-2.37.tar.bz2";

const MINIQUAD_JS_FILES: &[(&str, &str)] = &[(
    "js/gl.js",
    "https://raw.githubusercontent.com/not-fl3/miniquad/master/js/gl.js",
)];

// The font and JS glue are only needed to run the game, not to build it,
// so a failed download is a warning rather than a build failure.
fn main() {
    if let Err(e) = download_font() {
        println!("cargo:warning=skipping font download: {e}");
    }
    if let Err(e) = download_miniquad_js() {
        println!("cargo:warning=skipping miniquad js download: {e}");
    }
}

fn download_font() -> Result<(), Box<dyn Error>> {
    if Path::new(FONT_PATH).exists() {
        return Ok(());
    }

    eprintln!("Downloading DejaVu Sans font...");

    let response = ureq::get(FONT_URL).call()?;

    let reader = bzip2::read::BzDecoder::new(response.into_body().into_reader());
    let mut archive = tar::Archive::new(reader);

    for entry in archive.entries()? {
        let mut entry = entry?;
        let path = entry.path()?;

        if path.ends_with("DejaVuSans.ttf") {
            let mut data = Vec::new();
            entry.read_to_end(&mut data)?;

            fs::create_dir_all(Path::new(FONT_PATH).parent().unwrap())?;
            fs::write(FONT_PATH, &data)?;

            eprintln!("Downloaded DejaVuSans.ttf");
            return Ok(());
        }
    }

    Err("DejaVuSans.ttf not found in archive".into())
}

fn download_miniquad_js() -> Result<(), Box<dyn Error>> {
    for &(path, url) in MINIQUAD_JS_FILES {
        if Path::new(path).exists() {
            continue;
        }

        eprintln!("Downloading {path}...");

        let response = ureq::get(url).call()?;

        let mut data = Vec::new();
        response.into_body().into_reader().read_to_end(&mut data)?;

        fs::create_dir_all(Path::new(path).parent().unwrap())?;
        fs::write(path, &data)?;

        eprintln!("Downloaded {path}");
    }
    Ok(())
}
