use crate::core::position::PositionKey;
use crate::core::types::ZeroLengthAllelePolicy;
use crate::core::variant::{DecomposedAllele, VariantCall};
use crate::utils::validation::is_nucleotide_string;

/// Spanning-deletion allele; occupies one position like a base
const SPANNING_DELETION: &str = "*";

/// Number of reference positions an ALT allele's bases cover.
///
/// Symbolic alleles (`<DEL>`, `<DUP:TANDEM>`) and breakends carry no bases,
/// so they count as zero length and fall under the [`ZeroLengthAllelePolicy`].
fn allele_length(alt: &str) -> u64 {
    if alt == SPANNING_DELETION {
        1
    } else if is_nucleotide_string(alt) {
        alt.len() as u64
    } else {
        0
    }
}

/// Splits a multi-allelic call into one [`DecomposedAllele`] per ALT allele
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantDecomposer {
    zero_length_policy: ZeroLengthAllelePolicy,
}

impl VariantDecomposer {
    pub fn new(zero_length_policy: ZeroLengthAllelePolicy) -> Self {
        Self { zero_length_policy }
    }

    /// One allele per ALT entry, in ALT order.
    ///
    /// Every allele shares the call's start and reference bases; its end is
    /// `start + len(alt) - 1`. ALT entries without bases (empty, symbolic or
    /// breakend) are dropped or widened to a single base according to the
    /// policy, so no inverted interval is produced.
    pub fn decompose(&self, call: &VariantCall) -> Vec<DecomposedAllele> {
        call.alternate_alleles
            .iter()
            .enumerate()
            .filter_map(|(i, alt)| {
                let length = allele_length(alt);
                let end = match (length, self.zero_length_policy) {
                    (0, ZeroLengthAllelePolicy::Skip) => return None,
                    (0, ZeroLengthAllelePolicy::SingleBase) => call.start,
                    (n, _) => call.start + n - 1,
                };

                Some(DecomposedAllele {
                    position: PositionKey::new(call.contig.clone(), call.start, end),
                    reference_bases: call.reference_bases.clone(),
                    alternate_bases: alt.clone(),
                    allele_index: i,
                    annotation: call.annotation(i).map(str::to_string),
                })
            })
            .collect()
    }
}
