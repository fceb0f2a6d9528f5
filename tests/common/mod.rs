#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use migrations::Migrator;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;

use puntoventa::entities::{
    corte_caja, detalle_venta, lote_fabricacion, material_servicio, movimiento,
    proceso_fabricacion, promocion_venta, raw_material, receta_detalle, servicio_venta,
    sesion_usuario, usuario, venta,
};

/// Fresh in-memory SQLite database with the full migration history applied.
///
/// A single pooled connection keeps every statement on the same in-memory
/// database; sqlx enables foreign-key enforcement on SQLite by default.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");

    Migrator::up(&db, None).await.expect("apply migrations");

    db
}

pub async fn insert_raw_material(db: &DatabaseConnection, nombre: &str) -> raw_material::Model {
    raw_material::ActiveModel {
        nombre: Set(nombre.to_string()),
        categoria: Set("Abarrotes".to_string()),
        unidad_medida: Set("kg".to_string()),
        stock_anterior: Set(Decimal::ZERO),
        stock_nuevo: Set(dec!(25.000)),
        precio_por_unidad: Set(dec!(18.50)),
        precio_con_iva: Set(dec!(21.46)),
        precio_sin_iva: Set(dec!(18.50)),
        factor_conversion: Set(Decimal::ONE),
        fecha_registro: Set(Utc::now()),
        activo_para_venta: Set(true),
        precio_venta: Set(dec!(24.90)),
        descuento_venta: Set(Decimal::ZERO),
        margen_ganancia: Set(dec!(15.00)),
        eliminado: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert raw material")
}

pub async fn insert_movimiento(
    db: &DatabaseConnection,
    raw_material_id: i32,
) -> movimiento::Model {
    movimiento::ActiveModel {
        raw_material_id: Set(raw_material_id),
        tipo_movimiento: Set("Entrada".to_string()),
        cantidad: Set(dec!(5.000)),
        usuario: Set("almacen".to_string()),
        fecha: Set(Utc::now()),
        precio_con_iva: Set(dec!(21.46)),
        precio_sin_iva: Set(dec!(18.50)),
        stock_anterior: Set(dec!(20.000)),
        stock_posterior: Set(dec!(25.000)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert movimiento")
}

pub async fn insert_venta(db: &DatabaseConnection, numero_ticket: &str) -> venta::Model {
    venta::ActiveModel {
        numero_ticket: Set(numero_ticket.to_string()),
        fecha_venta: Set(Utc::now()),
        usuario: Set("caja1".to_string()),
        sub_total: Set(dec!(100.00)),
        iva: Set(dec!(16.00)),
        total: Set(dec!(116.00)),
        metodo_pago: Set("Efectivo".to_string()),
        estado: Set("Completada".to_string()),
        total_descuentos_aplicados: Set(Decimal::ZERO),
        monto_efectivo: Set(dec!(116.00)),
        monto_tarjeta: Set(Decimal::ZERO),
        monto_transferencia: Set(Decimal::ZERO),
        porcentaje_comision_tarjeta: Set(Decimal::ZERO),
        monto_comision_tarjeta: Set(Decimal::ZERO),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert venta")
}

pub async fn insert_detalle_material(
    db: &DatabaseConnection,
    venta_id: i32,
    raw_material_id: i32,
) -> detalle_venta::Model {
    detalle_venta::ActiveModel {
        venta_id: Set(venta_id),
        raw_material_id: Set(Some(raw_material_id)),
        nombre_producto: Set("Azucar estandar".to_string()),
        cantidad: Set(dec!(2.000)),
        unidad_medida: Set("kg".to_string()),
        precio_unitario: Set(dec!(24.90)),
        sub_total: Set(dec!(49.80)),
        costo_unitario: Set(dec!(18.50)),
        porcentaje_iva: Set(dec!(16.00)),
        descuento_unitario: Set(Decimal::ZERO),
        precio_original: Set(dec!(24.90)),
        es_descuento_manual: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert detalle (material)")
}

pub async fn insert_detalle_servicio(
    db: &DatabaseConnection,
    venta_id: i32,
    servicio_venta_id: i32,
) -> detalle_venta::Model {
    detalle_venta::ActiveModel {
        venta_id: Set(venta_id),
        servicio_venta_id: Set(Some(servicio_venta_id)),
        nombre_producto: Set("Molienda de nixtamal".to_string()),
        cantidad: Set(Decimal::ONE),
        unidad_medida: Set("servicio".to_string()),
        precio_unitario: Set(dec!(35.00)),
        sub_total: Set(dec!(35.00)),
        costo_unitario: Set(dec!(12.00)),
        porcentaje_iva: Set(dec!(16.00)),
        descuento_unitario: Set(Decimal::ZERO),
        precio_original: Set(dec!(35.00)),
        es_descuento_manual: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert detalle (servicio)")
}

pub async fn insert_servicio(db: &DatabaseConnection, nombre: &str) -> servicio_venta::Model {
    servicio_venta::ActiveModel {
        nombre: Set(nombre.to_string()),
        categoria: Set("Molino".to_string()),
        precio_base: Set(dec!(30.00)),
        precio_venta: Set(dec!(35.00)),
        duracion_estimada_min: Set(15),
        costo_materiales: Set(dec!(8.00)),
        costo_mano_obra: Set(dec!(4.00)),
        margen_ganancia: Set(dec!(20.00)),
        porcentaje_iva: Set(dec!(16.00)),
        disponible_en_pos: Set(true),
        venta_rapida: Set(false),
        activo: Set(true),
        fecha_registro: Set(Utc::now()),
        eliminado: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert servicio")
}

pub async fn insert_material_servicio(
    db: &DatabaseConnection,
    servicio_venta_id: i32,
    raw_material_id: i32,
) -> material_servicio::Model {
    material_servicio::ActiveModel {
        servicio_venta_id: Set(servicio_venta_id),
        raw_material_id: Set(raw_material_id),
        cantidad_necesaria: Set(dec!(0.500)),
        unidad_medida: Set("kg".to_string()),
        costo_unitario: Set(dec!(18.50)),
        porcentaje_merma: Set(dec!(2.00)),
        es_opcional: Set(false),
        orden_uso: Set(1),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert material de servicio")
}

pub async fn insert_promocion(db: &DatabaseConnection, nombre: &str) -> promocion_venta::Model {
    promocion_venta::ActiveModel {
        nombre: Set(nombre.to_string()),
        tipo_promocion: Set("PorcentajeDescuento".to_string()),
        valor: Set(dec!(10.00)),
        monto_minimo: Set(dec!(100.00)),
        cantidad_minima: Set(Decimal::ZERO),
        fecha_inicio: Set(Utc::now()),
        fecha_fin: Set(Utc::now() + chrono::Duration::days(30)),
        dias_semana: Set(Some("Lun,Mar,Mie,Jue,Vie".to_string())),
        contador_usos: Set(0),
        activa: Set(true),
        fecha_registro: Set(Utc::now()),
        eliminado: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert promocion")
}

pub async fn insert_usuario(
    db: &DatabaseConnection,
    nombre_usuario: &str,
    email: &str,
) -> usuario::Model {
    usuario::ActiveModel {
        nombre_usuario: Set(nombre_usuario.to_string()),
        email: Set(email.to_string()),
        password_hash: Set("$argon2id$v=19$m=19456,t=2,p=1$YWJj$ZGVm".to_string()),
        rol: Set("Vendedor".to_string()),
        activo: Set(true),
        intentos_fallidos: Set(0),
        fecha_registro: Set(Utc::now()),
        eliminado: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert usuario")
}

pub async fn insert_sesion(
    db: &DatabaseConnection,
    usuario_id: i32,
    session_token: &str,
) -> sesion_usuario::Model {
    sesion_usuario::ActiveModel {
        usuario_id: Set(usuario_id),
        session_token: Set(session_token.to_string()),
        fecha_inicio: Set(Utc::now()),
        ultima_actividad: Set(Utc::now()),
        direccion_ip: Set(Some("192.168.1.20".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert sesion")
}

pub async fn insert_corte(db: &DatabaseConnection, fecha_corte: NaiveDate) -> corte_caja::Model {
    corte_caja::ActiveModel {
        fecha_corte: Set(fecha_corte),
        cajero: Set("caja1".to_string()),
        estado: Set("Abierto".to_string()),
        total_ventas: Set(Decimal::ZERO),
        total_efectivo: Set(Decimal::ZERO),
        total_tarjeta: Set(Decimal::ZERO),
        total_transferencia: Set(Decimal::ZERO),
        total_comisiones: Set(Decimal::ZERO),
        ganancia_bruta: Set(Decimal::ZERO),
        ganancia_neta: Set(Decimal::ZERO),
        efectivo_contado: Set(Decimal::ZERO),
        fondo_caja_inicial: Set(dec!(500.00)),
        fondo_caja_siguiente: Set(dec!(500.00)),
        monto_depositado: Set(Decimal::ZERO),
        fecha_registro: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert corte de caja")
}

pub async fn insert_proceso(db: &DatabaseConnection, nombre: &str) -> proceso_fabricacion::Model {
    proceso_fabricacion::ActiveModel {
        nombre_producto: Set(nombre.to_string()),
        categoria: Set("Panaderia".to_string()),
        rendimiento_esperado: Set(dec!(40.000)),
        unidad_medida: Set("pieza".to_string()),
        duracion_minutos: Set(120),
        porcentaje_merma: Set(dec!(3.00)),
        incluye_mano_obra: Set(true),
        costo_mano_obra: Set(dec!(150.00)),
        incluye_energia: Set(true),
        costo_energia: Set(dec!(35.00)),
        incluye_transporte: Set(false),
        costo_transporte: Set(Decimal::ZERO),
        incluye_empaque: Set(false),
        costo_empaque: Set(Decimal::ZERO),
        incluye_otros: Set(false),
        costo_otros: Set(Decimal::ZERO),
        margen_ganancia: Set(dec!(30.00)),
        activo: Set(true),
        fecha_registro: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert proceso")
}

pub async fn insert_receta(
    db: &DatabaseConnection,
    proceso_fabricacion_id: i32,
    raw_material_id: i32,
) -> receta_detalle::Model {
    receta_detalle::ActiveModel {
        proceso_fabricacion_id: Set(proceso_fabricacion_id),
        raw_material_id: Set(raw_material_id),
        cantidad_requerida: Set(dec!(2.500)),
        unidad_medida: Set("kg".to_string()),
        costo_unitario: Set(dec!(18.50)),
        es_ingrediente_principal: Set(true),
        orden_adicion: Set(1),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert receta")
}

pub async fn insert_lote(
    db: &DatabaseConnection,
    proceso_fabricacion_id: i32,
    producto_resultante_id: Option<i32>,
) -> lote_fabricacion::Model {
    lote_fabricacion::ActiveModel {
        proceso_fabricacion_id: Set(proceso_fabricacion_id),
        cantidad_planeada: Set(dec!(40.000)),
        cantidad_obtenida: Set(dec!(38.000)),
        fecha_inicio: Set(Utc::now()),
        estado: Set("Terminado".to_string()),
        costo_real_materiales: Set(dec!(92.50)),
        costo_real_mano_obra: Set(dec!(150.00)),
        costo_real_total: Set(dec!(277.50)),
        operador: Set(Some("panadero1".to_string())),
        producto_resultante_id: Set(producto_resultante_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert lote")
}
