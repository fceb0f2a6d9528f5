//! SeaORM entities for the final schema. One module per table; the `Relation`
//! enums mirror the foreign-key delete behaviors enforced by the migrations.

pub mod configuracion_bascula;
pub mod configuracion_comisiones;
pub mod corte_caja;
pub mod detalle_venta;
pub mod lote_fabricacion;
pub mod material_servicio;
pub mod movimiento;
pub mod proceso_fabricacion;
pub mod promocion_venta;
pub mod raw_material;
pub mod receta_detalle;
pub mod servicio_venta;
pub mod sesion_usuario;
pub mod usuario;
pub mod venta;
