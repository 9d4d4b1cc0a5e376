use assert_cmd::Command;
use enumgen_core::AnyEmptyResult;

fn write_project(root: &std::path::Path) -> AnyEmptyResult {
	std::fs::write(root.join("enum.cs.tpl"), "enum #ENUM_NAME# {\n#VALUES#\n}\n")?;
	std::fs::write(
		root.join("enumgen.toml"),
		"template_path = \"enum.cs.tpl\"\noutput = \"Direction.cs\"\nenum_name = \
		 \"Direction\"\n\n[[values]]\nname = \"North\"\ncomment = \"Top\"\n",
	)?;
	Ok(())
}

#[test]
fn check_passes_after_generate() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_project(tmp.path())?;

	Command::cargo_bin("enumgen")?
		.env("NO_COLOR", "1")
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	Command::cargo_bin("enumgen")?
		.env("NO_COLOR", "1")
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("up to date"));

	Ok(())
}

#[test]
fn check_fails_when_output_is_missing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_project(tmp.path())?;

	Command::cargo_bin("enumgen")?
		.env("NO_COLOR", "1")
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(1)
		.stdout(predicates::str::contains("missing"));

	Ok(())
}

#[test]
fn check_fails_when_output_is_stale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_project(tmp.path())?;
	std::fs::write(tmp.path().join("Direction.cs"), "enum Direction { Old }\n")?;

	Command::cargo_bin("enumgen")?
		.env("NO_COLOR", "1")
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.arg("--diff")
		.assert()
		.failure()
		.code(1)
		.stdout(predicates::str::contains("out of date"))
		.stderr(predicates::str::contains("+\t\tNorth,"));

	Ok(())
}

#[test]
fn check_json_reports_status() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_project(tmp.path())?;

	Command::cargo_bin("enumgen")?
		.env("NO_COLOR", "1")
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	Command::cargo_bin("enumgen")?
		.env("NO_COLOR", "1")
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.arg("--format")
		.arg("json")
		.assert()
		.success()
		.stdout(predicates::str::contains("\"status\": \"ok\""));

	Ok(())
}

#[test]
fn check_is_deterministic_across_runs() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_project(tmp.path())?;

	Command::cargo_bin("enumgen")?
		.env("NO_COLOR", "1")
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	// Re-generating must produce a byte-identical file, so a second check
	// still passes.
	Command::cargo_bin("enumgen")?
		.env("NO_COLOR", "1")
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	Command::cargo_bin("enumgen")?
		.env("NO_COLOR", "1")
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	Ok(())
}
