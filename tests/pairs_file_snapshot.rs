use fstprep::io::pairs_file::write_pairs_file;

#[test]
fn pairs_file_snapshot_small() {
    let pops: Vec<String> = ["pop_Amhara", "pop_Chabu", "pop_Dizi", "pop_Hadza"]
        .iter()
        .map(|p| p.to_string())
        .collect();

    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("input.file");

    let count = write_pairs_file(&path, &pops).expect("write pairs file");
    assert_eq!(count, 6);

    let s = std::fs::read_to_string(path).expect("read pairs file");
    insta::assert_snapshot!(s);
}
