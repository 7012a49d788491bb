use std::error::Error;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn radixglyph_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_radixglyph"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(radixglyph_command().args(args).output()?)
}

#[test]
fn cli_encode_decode_roundtrip() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("payload.bin");
    let encoded = dir.path().join("payload.b32");
    let decoded = dir.path().join("payload.out");

    let original: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    fs::write(&input, &original)?;

    let encode = run(&[
        "encode",
        "--radix",
        "base32",
        input.to_str().unwrap(),
        encoded.to_str().unwrap(),
    ])?;
    assert!(
        encode.status.success(),
        "encode command failed: {}",
        String::from_utf8_lossy(&encode.stderr)
    );
    assert_eq!(fs::read_to_string(&encoded)?.len(), 1600);

    let decode = run(&[
        "decode",
        "--radix",
        "base32",
        encoded.to_str().unwrap(),
        decoded.to_str().unwrap(),
    ])?;
    assert!(
        decode.status.success(),
        "decode command failed: {}",
        String::from_utf8_lossy(&decode.stderr)
    );
    assert_eq!(fs::read(&decoded)?, original, "decoded data must match input");

    Ok(())
}

#[test]
fn cli_encode_to_stdout() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("m.txt");
    fs::write(&input, b"M")?;

    let encode = run(&["encode", input.to_str().unwrap()])?;
    assert!(encode.status.success());
    assert_eq!(String::from_utf8(encode.stdout)?, "TQ==\n");

    Ok(())
}

#[test]
fn cli_strict_decode_reports_invalid_symbol() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("bad.txt");
    fs::write(&input, "TW*u")?;

    let strict = run(&["decode", input.to_str().unwrap()])?;
    assert!(!strict.status.success(), "strict decode should fail");
    assert!(String::from_utf8(strict.stderr)?.contains("Invalid symbol"));

    let permissive = run(&["decode", "--permissive", input.to_str().unwrap()])?;
    assert!(permissive.status.success());

    Ok(())
}

#[test]
fn cli_hide_reveal_flow() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let carrier = dir.path().join("carrier.txt");
    let hidden = dir.path().join("hidden.txt");
    let combined = dir.path().join("combined.txt");

    fs::write(&carrier, "The weather is lovely today.")?;
    fs::write(&hidden, "attack at dawn")?;

    let hide = run(&[
        "hide",
        carrier.to_str().unwrap(),
        hidden.to_str().unwrap(),
        combined.to_str().unwrap(),
    ])?;
    assert!(
        hide.status.success(),
        "hide command failed: {}",
        String::from_utf8_lossy(&hide.stderr)
    );

    let reveal = run(&["reveal", combined.to_str().unwrap()])?;
    let stdout = String::from_utf8(reveal.stdout)?;
    assert!(stdout.contains("Visible: The weather is lovely today."));
    assert!(stdout.contains("Hidden: attack at dawn"));

    let inspect = run(&["inspect", combined.to_str().unwrap()])?;
    let report = String::from_utf8(inspect.stdout)?;
    assert!(report.contains("Hidden Payload:\n  14 scalars"));

    Ok(())
}

#[test]
fn cli_unknown_radix_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("x.txt");
    fs::write(&input, b"x")?;

    let encode = run(&["encode", "--radix", "base58", input.to_str().unwrap()])?;
    assert!(!encode.status.success());

    Ok(())
}

#[test]
fn cli_version_flag() -> Result<(), Box<dyn Error>> {
    let version = run(&["--version"])?;
    assert!(version.status.success());
    assert!(String::from_utf8(version.stdout)?.starts_with("radixglyph "));
    Ok(())
}

#[test]
fn cli_split_then_inspect_and_reveal() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("plain.txt");
    let spaced = dir.path().join("spaced.txt");
    fs::write(&input, "ab")?;

    let split = run(&["split", input.to_str().unwrap()])?;
    assert!(split.status.success());
    assert_eq!(String::from_utf8(split.stdout)?, "a\u{200B}b\u{200B}");

    let split = run(&["split", input.to_str().unwrap(), spaced.to_str().unwrap()])?;
    assert!(split.status.success());

    let inspect = run(&["inspect", spaced.to_str().unwrap()])?;
    assert!(inspect.status.success());
    let report = String::from_utf8(inspect.stdout)?;
    assert!(report.contains("Reserved markers: 2"));
    assert!(report.contains("U+200B zero-width space: 2"));
    assert!(report.contains("Hidden Payload:\n  none\n  3 malformed groups skipped"));
    assert!(report.contains("Escaped Text:\na\\u{200B}b\\u{200B}"));

    let reveal = run(&["reveal", spaced.to_str().unwrap()])?;
    assert!(
        reveal.status.success(),
        "reveal command failed: {}",
        String::from_utf8_lossy(&reveal.stderr)
    );
    let stdout = String::from_utf8(reveal.stdout)?;
    assert!(stdout.contains("Visible: ab\n"));
    assert!(stdout.contains("Hidden: \n"));

    Ok(())
}

#[test]
fn cli_reveal_ignores_stray_zero_width_space() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let carrier = dir.path().join("carrier.txt");
    let hidden = dir.path().join("hidden.txt");
    let combined = dir.path().join("combined.txt");
    fs::write(&carrier, "Hello")?;
    fs::write(&hidden, "hi")?;

    let hide = run(&[
        "hide",
        carrier.to_str().unwrap(),
        hidden.to_str().unwrap(),
        combined.to_str().unwrap(),
    ])?;
    assert!(hide.status.success());

    let mut text = fs::read_to_string(&combined)?;
    text.push('\u{200B}');
    fs::write(&combined, text)?;

    let reveal = run(&["reveal", combined.to_str().unwrap()])?;
    assert!(reveal.status.success());
    let stdout = String::from_utf8(reveal.stdout)?;
    assert!(stdout.contains("Visible: Hello\n"));
    assert!(stdout.contains("Hidden: hi\n"));

    Ok(())
}

#[test]
fn cli_encode_with_alphabet_flag() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("ma.txt");
    fs::write(&input, b"Ma")?;

    let encode = run(&[
        "encode",
        "--radix",
        "base16",
        "--alphabet",
        "0123456789abcdef",
        input.to_str().unwrap(),
    ])?;
    assert!(encode.status.success());
    assert_eq!(String::from_utf8(encode.stdout)?, "4d61\n");

    let short = run(&[
        "encode",
        "--radix",
        "base16",
        "--alphabet",
        "0123456789",
        input.to_str().unwrap(),
    ])?;
    assert!(!short.status.success());
    assert!(String::from_utf8(short.stderr)?.contains("Alphabet size mismatch"));

    Ok(())
}

#[test]
fn cli_decode_with_config_alphabet_and_strictness() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("encoded.txt");
    let config = dir.path().join("codec.json");
    fs::write(&input, "4d*61\n")?;
    fs::write(
        &config,
        r#"{"strictness":"permissive","alphabets":{"base16":"0123456789abcdef"}}"#,
    )?;

    let default = run(&["decode", "--radix", "base16", input.to_str().unwrap()])?;
    assert!(!default.status.success(), "built-in alphabet is uppercase");

    // Config supplies both the alphabet and permissive decoding
    let configured = run(&[
        "decode",
        "--radix",
        "base16",
        "--config",
        config.to_str().unwrap(),
        input.to_str().unwrap(),
    ])?;
    assert!(
        configured.status.success(),
        "decode command failed: {}",
        String::from_utf8_lossy(&configured.stderr)
    );
    assert_eq!(configured.stdout, b"Ma");

    Ok(())
}

#[test]
fn cli_decode_with_missing_config_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("encoded.txt");
    fs::write(&input, "TQ==")?;

    let decode = run(&[
        "decode",
        "--config",
        dir.path().join("absent.json").to_str().unwrap(),
        input.to_str().unwrap(),
    ])?;
    assert!(!decode.status.success());
    assert!(String::from_utf8(decode.stderr)?.starts_with("Error: IO error"));

    Ok(())
}

#[test]
fn cli_escape_unescape() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("input.txt");
    let escaped = dir.path().join("escaped.txt");
    fs::write(&input, "sos\n")?;

    let morse = run(&["escape", "--scheme", "morse", input.to_str().unwrap()])?;
    assert!(morse.status.success());
    assert_eq!(String::from_utf8(morse.stdout)?, "... --- ...\n");

    fs::write(&input, "a <b> & c\n")?;
    let html = run(&[
        "escape",
        "--scheme",
        "html",
        input.to_str().unwrap(),
        escaped.to_str().unwrap(),
    ])?;
    assert!(html.status.success());
    assert_eq!(
        fs::read_to_string(&escaped)?,
        "a&nbsp;&lt;b&gt;&nbsp;&amp;&nbsp;c"
    );

    let back = run(&["unescape", "--scheme", "html", escaped.to_str().unwrap()])?;
    assert!(back.status.success());
    assert_eq!(String::from_utf8(back.stdout)?, "a <b> & c");

    Ok(())
}

#[test]
fn cli_unescape_strictness() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("query.txt");
    fs::write(&input, "100%zz%20off")?;

    let strict = run(&["unescape", "--scheme", "url", input.to_str().unwrap()])?;
    assert!(!strict.status.success());
    assert!(String::from_utf8(strict.stderr)?.contains("Invalid symbol '%'"));

    let permissive = run(&[
        "unescape",
        "--scheme",
        "url",
        "--permissive",
        input.to_str().unwrap(),
    ])?;
    assert!(permissive.status.success());
    assert_eq!(String::from_utf8(permissive.stdout)?, "100%zz off");

    let unknown = run(&["escape", "--scheme", "rot13", input.to_str().unwrap()])?;
    assert!(!unknown.status.success());

    Ok(())
}
