use naga::front::glsl::{Frontend, Options};
use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{AddressSpace, Binding, Handle, Module, ShaderStage, Type, TypeInner};

use super::{ShaderError, ShaderProgramSource, ShaderType};

/// Byte offset of a uniform inside the program's push-constant block.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UniformLocation {
    pub offset: u32,
}

/// A vertex and fragment module that compiled and agree on their interface.
#[derive(Debug, Clone)]
pub struct LinkedProgram {
    vertex: Module,
    fragment: Module,
}

impl LinkedProgram {
    pub fn vertex_module(&self) -> &Module {
        &self.vertex
    }

    pub fn fragment_module(&self) -> &Module {
        &self.fragment
    }

    /// Looks up a push-constant uniform by name in either stage.
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        find_uniform(&self.fragment, name).or_else(|| find_uniform(&self.vertex, name))
    }

    /// Size in bytes of the largest push-constant block used by the program.
    pub fn push_constant_size(&self) -> u32 {
        push_constant_span(&self.vertex).max(push_constant_span(&self.fragment))
    }
}

/// Compiles one GLSL stage to validated naga IR.
///
/// The compiler output is logged and returned on failure.
pub fn compile_stage(source: &str, stage: ShaderType) -> Result<Module, ShaderError> {
    let mut frontend = Frontend::default();
    let module = frontend
        .parse(&Options::from(stage.naga_stage()), source)
        .map_err(|e| compile_error(stage, e.to_string()))?;

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| compile_error(stage, e.emit_to_string(source)))?;

    log::debug!("compiled {stage} shader");
    Ok(module)
}

/// Checks that both modules carry the right entry point and that every fragment
/// input is written by a vertex output of the same type.
pub fn link(vertex: Module, fragment: Module) -> Result<LinkedProgram, ShaderError> {
    let vs = entry_point(&vertex, ShaderStage::Vertex)
        .ok_or_else(|| link_error("vertex module has no vertex entry point".to_string()))?;
    let fs = entry_point(&fragment, ShaderStage::Fragment)
        .ok_or_else(|| link_error("fragment module has no fragment entry point".to_string()))?;

    let mut outputs = Vec::new();
    if let Some(result) = &vs.function.result {
        collect_locations(&vertex, result.ty, result.binding.as_ref(), &mut outputs);
    }

    let mut inputs = Vec::new();
    for arg in &fs.function.arguments {
        collect_locations(&fragment, arg.ty, arg.binding.as_ref(), &mut inputs);
    }

    for (location, ty) in &inputs {
        match outputs.iter().find(|(l, _)| l == location) {
            None => {
                return Err(link_error(format!(
                    "fragment input at location {location} is not written by the vertex shader"
                )));
            }
            Some((_, out_ty)) if out_ty != ty => {
                return Err(link_error(format!(
                    "location {location}: vertex output {out_ty:?} does not match fragment input {ty:?}"
                )));
            }
            Some(_) => {}
        }
    }

    Ok(LinkedProgram { vertex, fragment })
}

/// Compiles both stages of `source` and links them.
pub fn build_program(source: &ShaderProgramSource) -> Result<LinkedProgram, ShaderError> {
    let vertex = compile_stage(&source.vertex_source, ShaderType::Vertex)?;
    let fragment = compile_stage(&source.fragment_source, ShaderType::Fragment)?;
    link(vertex, fragment)
}

fn compile_error(stage: ShaderType, log: String) -> ShaderError {
    log::error!("Failed to compile {stage} shader!\n{log}");
    ShaderError::Compile { stage, log }
}

fn link_error(log: String) -> ShaderError {
    log::error!("Failed to link shader program!\n{log}");
    ShaderError::Link { log }
}

fn entry_point(module: &Module, stage: ShaderStage) -> Option<&naga::EntryPoint> {
    module.entry_points.iter().find(|ep| ep.stage == stage)
}

fn collect_locations(
    module: &Module,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    out: &mut Vec<(u32, TypeInner)>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => {
            out.push((*location, module.types[ty].inner.clone()));
        }
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_locations(module, member.ty, member.binding.as_ref(), out);
                }
            }
        }
    }
}

fn push_constants(module: &Module) -> impl Iterator<Item = &naga::GlobalVariable> {
    module
        .global_variables
        .iter()
        .map(|(_, var)| var)
        .filter(|var| var.space == AddressSpace::PushConstant)
}

fn find_uniform(module: &Module, name: &str) -> Option<UniformLocation> {
    push_constants(module).find_map(|var| match &module.types[var.ty].inner {
        TypeInner::Struct { members, .. } => members
            .iter()
            .find(|m| m.name.as_deref() == Some(name))
            .map(|m| UniformLocation { offset: m.offset }),
        _ if var.name.as_deref() == Some(name) => Some(UniformLocation { offset: 0 }),
        _ => None,
    })
}

fn push_constant_span(module: &Module) -> u32 {
    push_constants(module)
        .map(|var| module.types[var.ty].inner.size(module.to_ctx()))
        .max()
        .unwrap_or(0)
}
