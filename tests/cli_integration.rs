use assert_cmd::Command;
use predicates::prelude::*;

fn ecohub(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("ecohub").unwrap();
    cmd.env("ECOHUB_HOME", home);
    cmd
}

#[test]
fn fresh_store_lists_the_seed_collection() {
    let home = tempfile::tempdir().unwrap();

    ecohub(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Guia Definitivo para Certificação LEED"))
        .stdout(predicate::str::contains("BIM: A Digitalização do Canteiro de Obras"));

    // bootstrap is idempotent
    ecohub(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("LEED"));
}

#[test]
fn listing_narrows_by_category_and_search() {
    let home = tempfile::tempdir().unwrap();

    ecohub(home.path())
        .args(["list", "--category", "Inovação"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BIM"))
        .stdout(predicate::str::contains("LEED").not());

    ecohub(home.path())
        .args(["list", "--search", "leed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LEED"))
        .stdout(predicate::str::contains("BIM").not());

    ecohub(home.path())
        .args(["list", "--category", "Eventos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found."));
}

#[test]
fn view_renders_the_full_post() {
    let home = tempfile::tempdir().unwrap();

    ecohub(home.path())
        .args(["view", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INOVAÇÃO"))
        .stdout(predicate::str::contains("02 Abr, 2024"))
        .stdout(predicate::str::contains("Building Information Modeling"));

    ecohub(home.path())
        .args(["view", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no post with id 999"));
}

#[test]
fn mutation_requires_an_authorized_session() {
    let home = tempfile::tempdir().unwrap();

    ecohub(home.path())
        .args(["publish", "Guia X", "texto", "--no-editor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("authorization required"));

    ecohub(home.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("authorization required"));

    // nothing was written through either path
    ecohub(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("LEED"))
        .stdout(predicate::str::contains("Guia X").not());
}

#[test]
fn login_rejects_bad_credentials_and_accepts_the_pair() {
    let home = tempfile::tempdir().unwrap();

    ecohub(home.path())
        .args(["login", "wrong@x.com", "bad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Credenciais inválidas."));

    ecohub(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No admin session."));

    ecohub(home.path())
        .args(["login", "editor@ecohub.local", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session authorized."));

    ecohub(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin session active."));
}

#[test]
fn publish_edit_delete_round_trip() {
    let home = tempfile::tempdir().unwrap();

    ecohub(home.path())
        .args(["login", "editor@ecohub.local", "1234"])
        .assert()
        .success();

    ecohub(home.path())
        .args([
            "publish",
            "Guia X",
            "texto",
            "--no-editor",
            "--excerpt",
            "um resumo",
            "--category",
            "Eventos",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post published"));

    ecohub(home.path())
        .args(["list", "--category", "Eventos", "--search", "guia x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Guia X"));

    // a publish with no content stays unpublished
    ecohub(home.path())
        .args(["publish", "Só Título", "--no-editor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation failed"));

    // deleting a seed post removes it; a missing id is a quiet no-op
    ecohub(home.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: 1"));

    ecohub(home.path())
        .args(["delete", "424242", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No post with id 424242."));

    ecohub(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("LEED").not())
        .stdout(predicate::str::contains("Guia X"));
}

#[test]
fn logout_revokes_the_session() {
    let home = tempfile::tempdir().unwrap();

    ecohub(home.path())
        .args(["login", "editor@ecohub.local", "1234"])
        .assert()
        .success();
    ecohub(home.path()).arg("logout").assert().success();

    ecohub(home.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("authorization required"));
}

#[test]
fn preview_renders_without_persisting() {
    let home = tempfile::tempdir().unwrap();

    ecohub(home.path())
        .args(["login", "editor@ecohub.local", "1234"])
        .assert()
        .success();

    ecohub(home.path())
        .args([
            "publish",
            "Guia Y",
            "corpo do artigo",
            "--no-editor",
            "--preview",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Guia Y"))
        .stdout(predicate::str::contains("/artigos/guia-y"));

    ecohub(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Guia Y").not());
}
