//! End-to-end matching over files on disk
//!
//! Builds small CIViC and VCF fixtures in temporary files and runs them
//! through the same loaders and engine the binary uses.

use std::io::Write;

use civic_matcher::parsing::civic::load_civic_file;
use civic_matcher::parsing::vcf::VariantCallReader;
use civic_matcher::{run, KnowledgeBaseIndex, MatchKind, MatchingEngine};
use tempfile::NamedTempFile;

const CIVIC: &str = "variant_id\tvariant_civic_url\tgene\tvariant\tchromosome\tstart\tstop\treference_bases\tvariant_bases\treference_build
12\thttps://civicdb.org/links/variants/12\tBRAF\tV600E\t7\t140453136\t140453136\tA\tT\tGRCh37
13\thttps://civicdb.org/links/variants/13\tBRAF\tV600K\t7\t140453136\t140453137\tCA\tTT\tGRCh37
5\thttps://civicdb.org/links/variants/5\tALK\tEML4-ALK\t\t\t\t\t\t
33\thttps://civicdb.org/links/variants/33\tEGFR\tL858R\t7\t55259515\t55259515\tT\tG\tGRCh37
34\thttps://civicdb.org/links/variants/34\tEGFR\tL858M\t7\t55259515\t55259515\tT\tA\tGRCh37
";

const VCF: &str = "##fileformat=VCFv4.2
##FILTER=<ID=LowQual,Description=\"Low quality\">
##contig=<ID=7,length=159138663>
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\ttumor
7\t140453136\t.\tA\tT\t60\tPASS\t.\tGT\t0/1
7\t55259515\t.\tT\tG,C\t60\tPASS\t.\tGT\t1/2
7\t55259515\t.\tT\tG\t5\tLowQual\t.\tGT\t0/1
7\t100\t.\tG\tA\t60\t.\t.\tGT\t0/1
";

fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    temp.write_all(content.as_bytes()).expect("Failed to write temp file");
    temp.flush().expect("Failed to flush temp file");
    temp
}

#[test]
fn test_match_files_end_to_end() {
    let civic = write_temp(CIVIC, ".tsv");
    let vcf = write_temp(VCF, ".vcf");

    let index = KnowledgeBaseIndex::load_from_file(civic.path()).unwrap();
    assert_eq!(index.len(), 4, "row without coordinates is not indexed");

    let reader = VariantCallReader::open(vcf.path()).unwrap();
    assert_eq!(reader.sample_names(), ["tumor"]);

    let summary = MatchingEngine::new(&index).try_run(reader.records()).unwrap();

    assert_eq!(summary.accepted_count, 3);
    assert_eq!(summary.filtered_count, 1);

    // BRAF: one exact; EGFR G allele: exact + overlapping; EGFR C allele: two overlapping
    let described: Vec<(MatchKind, &str, String)> = summary
        .matches
        .iter()
        .map(|m| (m.kind, m.allele.alternate_bases.as_str(), m.record.label()))
        .collect();
    assert_eq!(
        described,
        vec![
            (MatchKind::Exact, "T", "BRAF V600E".to_string()),
            (MatchKind::Exact, "G", "EGFR L858R".to_string()),
            (MatchKind::Overlapping, "G", "EGFR L858M".to_string()),
            (MatchKind::Overlapping, "C", "EGFR L858R".to_string()),
            (MatchKind::Overlapping, "C", "EGFR L858M".to_string()),
        ]
    );
    assert_eq!(summary.exact_count(), 2);
    assert_eq!(summary.overlapping_count(), 3);
}

#[test]
fn test_top_level_run_matches_engine() {
    let civic = write_temp(CIVIC, ".tsv");
    let vcf = write_temp(VCF, ".vcf");

    let records = load_civic_file(civic.path()).unwrap();
    let calls: Vec<_> = VariantCallReader::open(vcf.path())
        .unwrap()
        .records()
        .collect::<Result<_, _>>()
        .unwrap();

    let first = run(records.clone(), calls.clone());
    let second = run(records, calls);
    assert_eq!(first, second);
    assert_eq!(first.matches.len(), 5);
}

#[test]
fn test_vcf_without_samples() {
    let vcf = write_temp(
        "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n7\t140453136\t.\tA\tT\t.\tPASS\t.\n",
        ".vcf",
    );
    let civic = write_temp(CIVIC, ".tsv");

    let index = KnowledgeBaseIndex::load_from_file(civic.path()).unwrap();
    let reader = VariantCallReader::open(vcf.path()).unwrap();
    assert!(reader.sample_names().is_empty());

    let summary = MatchingEngine::new(&index).try_run(reader.records()).unwrap();
    assert_eq!(summary.exact_count(), 1);
}
