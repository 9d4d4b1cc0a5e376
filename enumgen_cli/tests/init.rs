use assert_cmd::Command;
use enumgen_core::AnyEmptyResult;

#[test]
fn init_creates_options_and_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = Command::cargo_bin("enumgen")?;
	cmd.env("NO_COLOR", "1")
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created options file"));

	assert!(tmp.path().join("enumgen.toml").exists());
	assert!(tmp.path().join("enum.cs.tpl").exists());

	Ok(())
}

#[test]
fn init_is_a_noop_when_files_exist() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("enumgen.toml"), "# keep me\n")?;
	std::fs::write(tmp.path().join("enum.cs.tpl"), "keep me too\n")?;

	let mut cmd = Command::cargo_bin("enumgen")?;
	cmd.env("NO_COLOR", "1")
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("enumgen.toml"))?,
		"# keep me\n"
	);
	assert_eq!(
		std::fs::read_to_string(tmp.path().join("enum.cs.tpl"))?,
		"keep me too\n"
	);

	Ok(())
}

#[test]
fn init_output_generates_cleanly() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	Command::cargo_bin("enumgen")?
		.env("NO_COLOR", "1")
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	Command::cargo_bin("enumgen")?
		.env("NO_COLOR", "1")
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let generated =
		std::fs::read_to_string(tmp.path().join("Generated").join("Direction.cs"))?;
	assert!(generated.contains("public enum Direction"));
	assert!(generated.contains("\t\tNorth,"));
	assert!(!generated.contains('#'));

	Ok(())
}
