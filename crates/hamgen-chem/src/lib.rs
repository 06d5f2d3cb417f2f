//! `hamgen-chem`: molecular qubit Hamiltonians.
//!
//! Builds the Jordan-Wigner encoded Hamiltonian of a small molecule (H2 or
//! NH3). The ab-initio path runs an external electronic-structure driver
//! (PySCF), extracts the electronic energy operator and maps it to qubits;
//! whenever that path is unavailable or fails, a pre-tabulated operator is
//! returned instead.
//!
//! # Quick start
//!
//! ```rust
//! use hamgen_chem::builder::HamiltonianBuilder;
//! use hamgen_chem::format::{compact_string, DEFAULT_CUTOFF};
//!
//! let built = HamiltonianBuilder::precomputed_only()
//!     .force_precomputed(true)
//!     .build("NH3")
//!     .unwrap();
//! assert_eq!(built.operator.num_terms(), 15);
//! assert_eq!(compact_string(&built.operator, DEFAULT_CUTOFF).lines().count(), 15);
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod fermionic;
pub mod format;
pub mod mapper;
pub mod molecule;
pub mod operator;
pub mod problem;
pub mod serialize;

pub use builder::{
    BuiltHamiltonian, FallbackReason, HamiltonianBuilder, HamiltonianSource,
    build_molecule_qubit_hamiltonian,
};
pub use driver::{ElectronicStructureDriver, PySCFConfig, PySCFDriver};
pub use error::{ChemError, ChemResult};
pub use fermionic::FermionicOp;
pub use format::{DEFAULT_CUTOFF, compact_string};
pub use mapper::{JordanWignerMapper, QubitMapper};
pub use molecule::{Molecule, MoleculeSpec};
pub use operator::{Pauli, PauliString, SparsePauliOp};
pub use problem::{DriverOutput, ElectronicIntegrals, ElectronicStructureProblem, SecondQuantizedOps};
pub use serialize::{load_operator, save_operator};
