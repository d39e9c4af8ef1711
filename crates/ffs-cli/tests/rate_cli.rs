use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const EXPECTED_REPORT: &str = "    time steps      1000      
    time(ns)        5.00      
    15   => 20       1    / 1       1.00e+00  
************************************
    growth prob     1.00e+00  
    volume          1.10e-27  
    flux rate       1.82e+35  
    nucleation rate 1.82e+35  
";

#[test]
fn rate_command_prints_report_for_staged_run() {
    let temp = TempDir::new().expect("tempdir should be created");
    stage_run(temp.path());

    let output = run_rate_command(temp.path(), &[]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_REPORT);
}

#[test]
fn rate_command_output_is_identical_across_runs() {
    let temp = TempDir::new().expect("tempdir should be created");
    stage_run(temp.path());

    let first = run_rate_command(temp.path(), &[]);
    let second = run_rate_command(temp.path(), &[]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn rate_command_honours_log_and_data_file_flags() {
    let temp = TempDir::new().expect("tempdir should be created");
    stage_run(temp.path());
    fs::rename(
        temp.path().join("slurm-7648355.out"),
        temp.path().join("run-42.out"),
    )
    .expect("log should be renamed");
    fs::rename(temp.path().join("in.data"), temp.path().join("ice.data"))
        .expect("data file should be renamed");

    let output = run_rate_command(
        temp.path(),
        &["--logfile", "run-42.out", "--datafile", "ice.data"],
    );

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_REPORT);
}

#[test]
fn rate_command_missing_lambda_is_input_validation_failure() {
    let temp = TempDir::new().expect("tempdir should be created");
    stage_run(temp.path());
    write_file(
        &temp.path().join("ffs.input"),
        "equilibrium 0\n# lambda 10 15 20\n",
    );

    let output = run_rate_command(temp.path(), &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "no report should be printed");
    assert!(
        stderr.contains("ERROR: [INPUT.MISSING_PARAMETER]"),
        "stderr should name the missing parameter: {stderr}"
    );
    assert!(stderr.contains("FATAL EXIT CODE: 2"));
}

#[test]
fn rate_command_missing_log_is_io_failure() {
    let temp = TempDir::new().expect("tempdir should be created");
    stage_run(temp.path());

    let output = run_rate_command(temp.path(), &["--logfile", "absent.out"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr.contains("ERROR: [IO.INPUT_READ]"));
    assert!(stderr.contains("absent.out"));
    assert!(stderr.contains("FATAL EXIT CODE: 3"));
}

#[test]
fn rate_command_without_bounding_boxes_is_computation_failure() {
    let temp = TempDir::new().expect("tempdir should be created");
    stage_run(temp.path());
    let log_without_boxes = JOB_LOG
        .lines()
        .filter(|line| !line.contains(" - ("))
        .map(|line| format!("{line}\n"))
        .collect::<String>();
    write_file(&temp.path().join("slurm-7648355.out"), &log_without_boxes);

    let output = run_rate_command(temp.path(), &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr.contains("ERROR: [RUN.NO_BOUNDING_BOX]"));
}

#[test]
fn rate_command_rejects_unknown_flag_with_usage_exit_code() {
    let temp = TempDir::new().expect("tempdir should be created");

    let output = run_rate_command(temp.path(), &["--nprocs", "4"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERROR: [INPUT.CLI_USAGE]"));
}

fn run_rate_command(working_dir: &Path, extra_args: &[&str]) -> Output {
    let binary_path = env!("CARGO_BIN_EXE_ffs-rate");

    let mut command = Command::new(binary_path);
    command
        .current_dir(working_dir)
        .env_remove("RUST_LOG")
        .args(extra_args);
    command.output().expect("rate command should run")
}

fn stage_run(root: &Path) {
    write_file(&root.join("ffs.input"), FFS_INPUT);
    write_file(&root.join("lammps.input"), ENGINE_INPUT);
    write_file(&root.join("slurm-7648355.out"), JOB_LOG);
    write_file(&root.join("in.data"), "LAMMPS data file\n\n4096 atoms\n");
    write_file(
        &root.join("trajectory.out.txt"),
        "   1    ___ (__________)  >==1777855480                 1000==>   16 (xyz.0__1_0)\n",
    );
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dir should be created");
    }
    fs::write(path, content).expect("file should be written");
}

const FFS_INPUT: &str = "# ffs run parameters
equilibrium 0
check_every 50
lambda 10 15 20   # basin, first interface, final
";

const ENGINE_INPUT: &str = "units metal
read_data in.data
timestep 5
";

const JOB_LOG: &str = "LAMMPS (29 Oct 2020)
[date=1650000000] [universe=1] [steps=500] : 3 ... 15
[date=1650000001] [universe=1] [steps=1000] : 8 ... 15
   1    ___ (__________)  >==1777855480                 1000==>   16 (xyz.0__1_0)
0__1_0 (0.000000, 0.000000, 0.000000) - (10.000000, 10.000000, 10.000000)
[date=1650000002] [universe=1] [steps=1500] : 17 ... 20
   1     16 (xyz.0__1_0)  >==0000000042                 1500==>   21 (xyz.1__1_0)
1__1_0 (0.000000, 0.000000, 0.000000) - (10.000000, 10.000000, 12.000000)
Total wall time: 0:01:02
";
