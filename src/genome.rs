//! Genome codec.
//!
//! An [`Individual`] is a 64-bit genome of which only the low
//! `GENE_SIZE × GENES_PER_INDIVIDUAL` bits are read. Each 4-bit group is a
//! [`Gene`]: a digit, an arithmetic operator, or an unmapped value.
//!
//! # Compilation
//!
//! [`Individual::compile`] turns the genes into text by walking them from
//! the most-significant group to the least-significant one and keeping only
//! the symbols that alternate operand/operator roles:
//!
//! ```
//! use genexpr::genome::Individual;
//!
//! // genes: 1 + 2 - - 3 <invalid> * 4
//! let individual = Individual::from_genome(0x1A2B_B3EC4);
//! assert_eq!(individual.compile(), "1+2-3*4");
//! ```
//!
//! The text starts with a digit and an operator in the last gene slot is
//! never emitted, but the result is not guaranteed to be a well-formed
//! expression (it can still end with an operator).

use rand::Rng;

/// Width of a single gene in bits.
pub const GENE_SIZE: u32 = 4;

/// Number of genes read from a genome.
pub const GENES_PER_INDIVIDUAL: usize = 9;

/// Number of genome bits carrying genes (36).
pub const GENOME_BITS: u32 = GENE_SIZE * GENES_PER_INDIVIDUAL as u32;

/// Mask selecting the used genome bits.
pub const GENOME_MASK: u64 = (1u64 << GENOME_BITS) - 1;

const GENE_MASK: u64 = (1u64 << GENE_SIZE) - 1;

/// Binary arithmetic operator encoded by gene values 10–13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Textual symbol used in compiled expressions.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// Syntactic role of a mapped gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Operand,
    Operator,
}

/// A decoded 4-bit gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gene {
    /// Decimal digit `0..=9`.
    Digit(u8),
    /// Arithmetic operator.
    Operator(Operator),
    /// Values 14 and 15; contribute nothing to the compiled text.
    Invalid,
}

impl Gene {
    /// Decodes the low four bits of `bits`.
    pub fn from_bits(bits: u8) -> Self {
        match bits & GENE_MASK as u8 {
            d @ 0..=9 => Gene::Digit(d),
            10 => Gene::Operator(Operator::Add),
            11 => Gene::Operator(Operator::Sub),
            12 => Gene::Operator(Operator::Mul),
            13 => Gene::Operator(Operator::Div),
            _ => Gene::Invalid,
        }
    }

    /// Role of the gene, `None` for unmapped values.
    pub fn role(self) -> Option<Role> {
        match self {
            Gene::Digit(_) => Some(Role::Operand),
            Gene::Operator(_) => Some(Role::Operator),
            Gene::Invalid => None,
        }
    }

    /// Symbol emitted for the gene, `None` for unmapped values.
    pub fn symbol(self) -> Option<char> {
        match self {
            Gene::Digit(d) => char::from_digit(u32::from(d), 10),
            Gene::Operator(op) => Some(op.symbol()),
            Gene::Invalid => None,
        }
    }
}

/// A candidate solution: an immutable 64-bit genome.
///
/// Bits above [`GENOME_BITS`] are stored and inherited through crossover
/// but never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual(u64);

impl Individual {
    /// Wraps a raw genome.
    pub const fn from_genome(genome: u64) -> Self {
        Self(genome)
    }

    /// Creates an individual whose 64 bits are uniformly random.
    ///
    /// No validation is done; many random genomes compile to an empty or
    /// unusable expression.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random::<u64>())
    }

    /// Returns the raw genome.
    pub const fn genome(self) -> u64 {
        self.0
    }

    /// Slices the genome into genes, most-significant group first.
    pub fn genes(self) -> [Gene; GENES_PER_INDIVIDUAL] {
        std::array::from_fn(|i| {
            let shift = GENE_SIZE * (GENES_PER_INDIVIDUAL - 1 - i) as u32;
            Gene::from_bits(((self.0 >> shift) & GENE_MASK) as u8)
        })
    }

    /// Compiles the genome into an expression string.
    ///
    /// A symbol is appended only when its role differs from the previously
    /// appended one (the walk starts as if an operator had been emitted).
    /// Unmapped genes are skipped without affecting the alternation, and an
    /// operator in the least-significant slot is dropped.
    pub fn compile(self) -> String {
        let last = GENES_PER_INDIVIDUAL - 1;
        let mut text = String::with_capacity(GENES_PER_INDIVIDUAL);
        let mut previous = Role::Operator;

        for (position, gene) in self.genes().into_iter().enumerate() {
            let (Some(role), Some(symbol)) = (gene.role(), gene.symbol()) else {
                continue;
            };
            if role == previous || (role == Role::Operator && position == last) {
                continue;
            }
            text.push(symbol);
            previous = role;
        }

        text
    }
}

impl From<u64> for Individual {
    fn from(genome: u64) -> Self {
        Self(genome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn is_operator(c: char) -> bool {
        matches!(c, '+' | '-' | '*' | '/')
    }

    #[test]
    fn test_gene_table() {
        for d in 0..=9u8 {
            assert_eq!(Gene::from_bits(d), Gene::Digit(d));
            assert_eq!(Gene::from_bits(d).role(), Some(Role::Operand));
        }
        assert_eq!(Gene::from_bits(0xA).symbol(), Some('+'));
        assert_eq!(Gene::from_bits(0xB).symbol(), Some('-'));
        assert_eq!(Gene::from_bits(0xC).symbol(), Some('*'));
        assert_eq!(Gene::from_bits(0xD).symbol(), Some('/'));
        assert_eq!(Gene::from_bits(0xE), Gene::Invalid);
        assert_eq!(Gene::from_bits(0xF), Gene::Invalid);
        assert_eq!(Gene::Invalid.role(), None);
    }

    #[test]
    fn test_genes_most_significant_first() {
        let genes = Individual::from_genome(0x0123_4567_8).genes();
        let expected: Vec<Gene> = (0..=8).map(Gene::Digit).collect();
        assert_eq!(genes.to_vec(), expected);
    }

    #[test]
    fn test_genes_ignore_unused_high_bits() {
        let low = 0x1A2B_B3EC4u64;
        let noisy = low | 0xABCD_EF00_0000_0000;
        assert_eq!(
            Individual::from_genome(low).genes(),
            Individual::from_genome(noisy).genes()
        );
        assert_eq!(
            Individual::from_genome(noisy).compile(),
            Individual::from_genome(low).compile()
        );
    }

    #[test]
    fn test_compile_hand_verified() {
        // 1, +, 2, -, - (same role, dropped), 3, invalid, *, 4
        let individual = Individual::from_genome(0x1A2B_B3EC4);
        assert_eq!(individual.compile(), "1+2-3*4");
    }

    #[test]
    fn test_compile_low_genes_only() {
        // genes: 0 0 0 0 0 0 1 + 2 → leading zero kept, repeated digits dropped
        assert_eq!(Individual::from_genome(0x1A2).compile(), "0+2");
    }

    #[test]
    fn test_compile_drops_final_operator() {
        // 5 + 6 <invalid> 7 - 8 * /
        let individual = Individual::from_genome(0x5A6F_7B8CD);
        assert_eq!(individual.compile(), "5+6-8*");

        // 0 ... 0 1 + : the trailing operator would alternate but sits in the last slot
        assert_eq!(Individual::from_genome(0x1A).compile(), "0");
        assert_eq!(Individual::from_genome(0x2A3B_4C5EA).compile(), "2+3-4*5");
    }

    #[test]
    fn test_compile_leading_operators_skipped() {
        // + - * / 7 + 8 / 9
        let individual = Individual::from_genome(0xABCD_7A8D9);
        assert_eq!(individual.compile(), "7+8/9");
    }

    #[test]
    fn test_compile_extremes() {
        assert_eq!(Individual::from_genome(0).compile(), "0");
        assert_eq!(Individual::from_genome(u64::MAX).compile(), "");
        assert_eq!(Individual::from_genome(0xEEEE_EEEEE).compile(), "");
        assert_eq!(Individual::from_genome(0xAAAA_AAAAA).compile(), "");
    }

    #[test]
    fn test_random_uses_full_width() {
        let mut rng = create_rng(42);
        let above = (0..200)
            .map(|_| Individual::random(&mut rng))
            .filter(|ind| ind.genome() & !GENOME_MASK != 0)
            .count();
        assert!(above > 150, "high bits should be random, got {above}/200");
    }

    proptest! {
        #[test]
        fn prop_compile_alternates(genome in any::<u64>()) {
            let text = Individual::from_genome(genome).compile();
            let chars: Vec<char> = text.chars().collect();

            if let Some(&first) = chars.first() {
                prop_assert!(first.is_ascii_digit(), "leading operator in {:?}", text);
            }
            for pair in chars.windows(2) {
                prop_assert_ne!(is_operator(pair[0]), is_operator(pair[1]), "{:?}", text);
            }
            prop_assert!(chars.len() <= GENES_PER_INDIVIDUAL);
        }

        #[test]
        fn prop_compile_ignores_high_bits(genome in any::<u64>(), noise in any::<u64>()) {
            let a = Individual::from_genome(genome);
            let b = Individual::from_genome((genome & GENOME_MASK) | (noise & !GENOME_MASK));
            prop_assert_eq!(a.compile(), b.compile());
        }
    }
}
