use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const QUIJOTE: &str = "Media noche era por filo, poco más a menos, cuando don Quijote y Sancho
dejaron el monte y entraron en el Toboso. Estaba el pueblo en un sosegado
silencio, porque todos sus vecinos dormían y reposaban a pierna tendida,
como suele decirse. Era la noche entreclara, puesto que quisiera Sancho que
fuera del todo escura, por hallar en su escuridad disculpa de su sandez. No
se oía en todo el lugar sino ladridos de perros, que atronaban los oídos de
don Quijote y turbaban el corazón de Sancho. De cuando en cuando, rebuznaba
un jumento, gruñían puercos, mayaban gatos, cuyas voces, de diferentes
sonidos, se aumentaban con el silencio de la noche, todo lo cual tuvo el
enamorado caballero a mal agüero; pero, con todo esto, dijo a Sancho:

-Sancho, hijo, guía al palacio de Dulcinea: quizá podrá ser que la hallemos
despierta.
";

fn quijote_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quijote").expect("Failed to find quijote binary");
    cmd.env("RUST_LOG", "off");
    cmd
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

#[test]
fn no_arguments_is_a_usage_error() {
    quijote_cmd()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn reports_quijote_passage() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("toboso.txt");
    write_file(&path, QUIJOTE);

    let name = path.to_string_lossy().to_string();
    let expected = format!(
        "era:1\n\t{name}:4\nestaba:1\n\t{name}:2\nquizá:1\n\t{name}:12\nsancho:1\n\t{name}:12\n"
    );

    quijote_cmd().arg(&path).assert().success().stdout(expected);
}

#[test]
fn relative_filename_is_printed_as_given() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("testFile"), "a. test\nb. test\nc. test\nd. test\n");

    quijote_cmd()
        .current_dir(temp.path())
        .arg("testFile")
        .assert()
        .success()
        .stdout("test:4\n\ttestFile:1\n\ttestFile:2\n\ttestFile:3\n\ttestFile:4\n");
}

#[test]
fn multiple_files_in_argument_order() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("b.txt"), "fin. Vale\n");
    write_file(&temp.path().join("a.txt"), "uno.\nVale. Hermano\n");

    quijote_cmd()
        .current_dir(temp.path())
        .args(["b.txt", "a.txt"])
        .assert()
        .success()
        .stdout("hermano:1\n\ta.txt:2\nvale:2\n\tb.txt:1\n\ta.txt:2\n");
}

#[test]
fn missing_file_aborts_without_report() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("ok.txt"), "uno. Dos tres\n");

    quijote_cmd()
        .current_dir(temp.path())
        .args(["ok.txt", "missing.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn output_flag_writes_file() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("in.txt"), "sin duda alguna. Vale.\n");

    quijote_cmd()
        .current_dir(temp.path())
        .args(["--output", "report.txt", "in.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report = fs::read_to_string(temp.path().join("report.txt")).unwrap();
    assert_eq!(report, "vale:1\n\tin.txt:1\n");
}

#[test]
fn output_file_not_created_on_open_failure() {
    let temp = tempdir().unwrap();

    quijote_cmd()
        .current_dir(temp.path())
        .args(["-o", "report.txt", "missing.txt"])
        .assert()
        .failure();

    assert!(!temp.path().join("report.txt").exists());
}

#[test]
fn config_overrides_min_word_len() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("in.txt"), "Hola. Yo soy. Vale\n");
    write_file(&temp.path().join("opts.toml"), "min_word_len = 2\n");

    quijote_cmd()
        .current_dir(temp.path())
        .args(["--config", "opts.toml", "in.txt"])
        .assert()
        .success()
        .stdout("vale:1\n\tin.txt:1\nyo:1\n\tin.txt:1\n");
}

#[test]
fn invalid_config_is_rejected() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("in.txt"), "uno. Dos\n");
    write_file(&temp.path().join("opts.toml"), "min_word_len = 0\n");

    quijote_cmd()
        .current_dir(temp.path())
        .args(["-c", "opts.toml", "in.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("min_word_len"));
}

#[test]
fn logs_go_to_stderr() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("in.txt"), "uno. Dos\n");

    let mut cmd = Command::cargo_bin("quijote").unwrap();
    cmd.env("RUST_LOG", "info")
        .current_dir(temp.path())
        .arg("in.txt")
        .assert()
        .success()
        .stdout("dos:1\n\tin.txt:1\n")
        .stderr(predicate::str::contains("index finished"));
}

#[test]
fn terminators_cannot_be_configured() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("in.txt"), "uno; Dos\n");
    write_file(&temp.path().join("opts.toml"), "terminators = [\";\"]\n");

    quijote_cmd()
        .current_dir(temp.path())
        .args(["-c", "opts.toml", "in.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn read_failure_is_reported_and_run_continues() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    write_file(&temp.path().join("g.txt"), "uno. Dos\n");

    // RUST_LOG=off：错误仍须出现在 stderr
    quijote_cmd()
        .current_dir(temp.path())
        .args(["sub", "g.txt"])
        .assert()
        .success()
        .stdout("dos:1\n\tg.txt:1\n")
        .stderr(predicate::str::contains("sub"));
}
