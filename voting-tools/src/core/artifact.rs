// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Both Hardhat (`artifacts/contracts/Name.sol/Name.json`) and Foundry (`out/Name.sol/Name.json`)
//! layouts are understood. Hardhat stores bytecode as a plain hex string while Foundry nests it
//! under an `object` key; either form is accepted.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{Constructor, JsonAbi},
    primitives::Bytes,
};
use serde::Deserialize;

use crate::utils::decode0x;

/// Hardhat keeps compiler inputs and outputs here; never contains contract artifacts.
const BUILD_INFO_DIR: &str = "build-info";

const DEBUG_ARTIFACT_SUFFIX: &str = ".dbg.json";

/// Marker solc leaves in bytecode that still needs library addresses linked in.
const LINK_PLACEHOLDER: &str = "__$";

#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("artifacts directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("artifact for contract {name} not found in {}", .root.display())]
    NotFound { name: String, root: PathBuf },
    #[error(
        "multiple artifacts for contract {name}: {}",
        .candidates.iter().map(|path| path.display().to_string()).collect::<Vec<_>>().join(", ")
    )]
    Ambiguous {
        name: String,
        candidates: Vec<PathBuf>,
    },
    #[error("failed to read artifact {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid artifact {}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact {} has no bytecode (is {name} abstract or an interface?)", .path.display())]
    NoBytecode { name: String, path: PathBuf },
    #[error("invalid bytecode in {}", .path.display())]
    InvalidBytecode {
        path: PathBuf,
        #[source]
        source: hex::FromHexError,
    },
    #[error("contract {0} references unlinked libraries")]
    UnlinkedLibraries(String),
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    #[serde(default)]
    contract_name: Option<String>,
    #[serde(default)]
    abi: JsonAbi,
    #[serde(default)]
    bytecode: Option<RawBytecode>,
    #[serde(default)]
    deployed_bytecode: Option<RawBytecode>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(String),
    Object { object: String },
}

impl RawBytecode {
    fn as_str(&self) -> &str {
        match self {
            Self::Hex(hex) => hex,
            Self::Object { object } => object,
        }
    }
}

/// A compiled contract that can be deployed.
#[derive(Clone, Debug)]
pub struct ContractFactory {
    name: String,
    abi: JsonAbi,
    bytecode: Bytes,
    deployed_bytecode: Option<Bytes>,
    init_code: Bytes,
}

impl ContractFactory {
    pub fn new(
        name: impl Into<String>,
        abi: JsonAbi,
        bytecode: Bytes,
        deployed_bytecode: Option<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            abi,
            init_code: bytecode.clone(),
            bytecode,
            deployed_bytecode,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Creation bytecode, without constructor arguments.
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Runtime bytecode, if the artifact recorded it.
    pub fn deployed_bytecode(&self) -> Option<&Bytes> {
        self.deployed_bytecode.as_ref()
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }

    /// Data sent in the contract creation transaction.
    pub fn init_code(&self) -> &Bytes {
        &self.init_code
    }

    /// Encodes constructor arguments given as strings and appends them to the init code.
    pub fn with_constructor_args(mut self, args: &[String]) -> Result<Self, ResolutionError> {
        let inputs = self
            .constructor()
            .map(|constructor| constructor.inputs.as_slice())
            .unwrap_or_default();
        if args.len() != inputs.len() {
            return Err(ResolutionError::InvalidConstructor(format!(
                "mismatch number of constructor arguments (want {}; got {})",
                inputs.len(),
                args.len(),
            )));
        }
        let Some(constructor) = self.constructor() else {
            return Ok(self);
        };

        let mut values = Vec::<DynSolValue>::with_capacity(args.len());
        for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
            let ty = param.resolve().map_err(|err| {
                ResolutionError::InvalidConstructor(format!(
                    "could not resolve constructor arg {param}: {err}"
                ))
            })?;
            let value = ty.coerce_str(arg).map_err(|err| {
                ResolutionError::InvalidConstructor(format!(
                    "could not parse constructor arg {param}: {err}"
                ))
            })?;
            values.push(value);
        }
        let encoded = constructor
            .abi_encode_input_raw(&values)
            .map_err(|err| ResolutionError::InvalidConstructor(err.to_string()))?;

        let mut init_code = self.bytecode.to_vec();
        init_code.extend(encoded);
        self.init_code = init_code.into();
        Ok(self)
    }
}

/// Registry of compiled artifacts rooted at a build output directory.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locates the artifact file for a contract.
    ///
    /// The Foundry path `root/N.sol/N.json` wins outright. Otherwise exactly one `N.json` must
    /// exist below the root.
    pub fn find(&self, name: &str) -> Result<PathBuf, ResolutionError> {
        if !self.root.is_dir() {
            return Err(ResolutionError::MissingDirectory(self.root.clone()));
        }
        let not_found = || ResolutionError::NotFound {
            name: name.to_owned(),
            root: self.root.clone(),
        };
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(not_found());
        }

        let file_name = format!("{name}.json");
        let direct = self.root.join(format!("{name}.sol")).join(&file_name);
        if direct.is_file() {
            return Ok(direct);
        }
        let mut candidates = Vec::new();
        search(&self.root, &file_name, &mut candidates).map_err(|source| ResolutionError::Io {
            path: self.root.clone(),
            source,
        })?;
        match candidates.len() {
            0 => Err(not_found()),
            1 => Ok(candidates.remove(0)),
            _ => Err(ResolutionError::Ambiguous {
                name: name.to_owned(),
                candidates,
            }),
        }
    }

    /// Resolves a contract name to a deployable factory.
    pub fn load(&self, name: &str) -> Result<ContractFactory, ResolutionError> {
        let path = self.find(name)?;
        debug!(@grey, "reading artifact: {}", path.display());
        let contents = fs::read_to_string(&path).map_err(|source| ResolutionError::Io {
            path: path.clone(),
            source,
        })?;
        let artifact: RawArtifact =
            serde_json::from_str(&contents).map_err(|source| ResolutionError::InvalidJson {
                path: path.clone(),
                source,
            })?;

        if let Some(recorded) = &artifact.contract_name {
            if recorded != name {
                warn!(@yellow, "artifact {} names contract {}, expected {}", path.display(), recorded, name);
            }
        }

        let bytecode = decode_bytecode(name, &path, artifact.bytecode.as_ref())?.ok_or_else(|| {
            ResolutionError::NoBytecode {
                name: name.to_owned(),
                path: path.clone(),
            }
        })?;
        let deployed_bytecode = decode_bytecode(name, &path, artifact.deployed_bytecode.as_ref())?;

        Ok(ContractFactory::new(
            name,
            artifact.abi,
            bytecode,
            deployed_bytecode,
        ))
    }
}

/// Decodes a bytecode field, treating missing and empty code alike.
fn decode_bytecode(
    name: &str,
    path: &Path,
    raw: Option<&RawBytecode>,
) -> Result<Option<Bytes>, ResolutionError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let text = raw.as_str();
    if text.contains(LINK_PLACEHOLDER) {
        return Err(ResolutionError::UnlinkedLibraries(name.to_owned()));
    }
    let code = decode0x(text).map_err(|source| ResolutionError::InvalidBytecode {
        path: path.to_owned(),
        source,
    })?;
    Ok((!code.is_empty()).then(|| code.into()))
}

/// Collects every artifact file with the given name, visiting entries in sorted order.
fn search(dir: &Path, file_name: &str, found: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            if path.file_name().is_some_and(|n| n == BUILD_INFO_DIR) {
                continue;
            }
            search(&path, file_name, found)?;
        } else if path.file_name().is_some_and(|n| n == file_name) && !is_debug_artifact(&path) {
            found.push(path);
        }
    }
    Ok(())
}

/// Hardhat writes a `N.dbg.json` next to each artifact; it only points at build info.
fn is_debug_artifact(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(DEBUG_ARTIFACT_SUFFIX))
}
