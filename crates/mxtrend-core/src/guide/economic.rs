//! Indicators related to gross domestic product.

use super::IndicatorGuideEntry;

pub(super) static ENTRIES: [IndicatorGuideEntry; 22] = [
    IndicatorGuideEntry {
        series_name: "Central government debt, total (% of GDP)",
        translated_label: "Deuda total del gobierno central (% del PIB)",
        definition: "Total de la deuda del gobierno central en relación al PIB.",
        purpose: "Medir la carga de deuda del gobierno.",
        importance: "Indica la sostenibilidad fiscal del gobierno.",
    },
    IndicatorGuideEntry {
        series_name: "Domestic general government health expenditure (% of GDP)",
        translated_label: "Gasto en salud del gobierno general doméstico (% del PIB)",
        definition: "Total del gasto del gobierno en salud en relación al PIB.",
        purpose: "Evaluar el gasto público en salud.",
        importance: "Refleja el compromiso del gobierno con la salud pública.",
    },
    IndicatorGuideEntry {
        series_name: "Expense (% of GDP)",
        translated_label: "Gasto (% del PIB)",
        definition: "Total del gasto del gobierno en relación al PIB.",
        purpose: "Medir el nivel de gasto del gobierno.",
        importance: "Indica la eficiencia y alcance del gasto público.",
    },
    IndicatorGuideEntry {
        series_name: "Foreign direct investment, net inflows (% of GDP)",
        translated_label: "Inversión extranjera directa, entradas netas (% del PIB)",
        definition: "Inversión extranjera neta recibida en relación al PIB.",
        purpose: "Evaluar la atracción de inversión extranjera.",
        importance: "Señala la confianza internacional y potencial de crecimiento económico.",
    },
    IndicatorGuideEntry {
        series_name: "GDP per capita growth (annual %)",
        translated_label: "Crecimiento del PIB per cápita (anual %)",
        definition: "Tasa de crecimiento anual del PIB per cápita.",
        purpose: "Medir el crecimiento económico por habitante.",
        importance: "Indica el desarrollo económico y aumento del nivel de vida.",
    },
    IndicatorGuideEntry {
        series_name: "GDP per capita (current US$)",
        translated_label: "PIB per cápita (US$ actuales)",
        definition: "PIB dividido por la población, medido en dólares actuales.",
        purpose: "Comparar la riqueza promedio entre países.",
        importance: "Refleja el bienestar económico de los ciudadanos.",
    },
    IndicatorGuideEntry {
        series_name: "GDP per capita (current LCU)",
        translated_label: "PIB per cápita (moneda local actual)",
        definition: "PIB dividido por la población, medido en moneda local actual.",
        purpose: "Medir la riqueza promedio en términos locales.",
        importance: "Permite la evaluación interna de la economía.",
    },
    IndicatorGuideEntry {
        series_name: "GDP growth (annual %)",
        translated_label: "Crecimiento del PIB (anual %)",
        definition: "Tasa de crecimiento anual del PIB.",
        purpose: "Evaluar la expansión económica del país.",
        importance: "Indica la salud y dinámica económica del país.",
    },
    IndicatorGuideEntry {
        series_name: "GDP per capita, PPP (constant 2021 international $)",
        translated_label: "PIB per cápita, PPA (dólares internacionales constantes de 2021)",
        definition: "PIB per cápita ajustado por paridad de poder adquisitivo en dólares constantes de 2021.",
        purpose: "Comparar el nivel de vida ajustado por costo de vida.",
        importance: "Proporciona una comparación más realista del bienestar entre países.",
    },
    IndicatorGuideEntry {
        series_name: "GDP per capita, PPP (current international $)",
        translated_label: "PIB per cápita, PPA (dólares internacionales actuales)",
        definition: "PIB per cápita ajustado por paridad de poder adquisitivo en dólares actuales.",
        purpose: "Medir la riqueza promedio ajustada por costo de vida.",
        importance: "Facilita la comparación internacional de estándares de vida.",
    },
    IndicatorGuideEntry {
        series_name: "GDP per person employed (constant 2021 PPP $)",
        translated_label: "PIB por persona empleada (PPA constante de 2021)",
        definition: "PIB dividido por la población empleada, ajustado por PPA en dólares constantes de 2021.",
        purpose: "Evaluar la productividad laboral.",
        importance: "Indica la eficiencia económica y productividad del trabajo.",
    },
    IndicatorGuideEntry {
        series_name: "Government expenditure on education, total (% of GDP)",
        translated_label: "Gasto del gobierno en educación, total (% del PIB)",
        definition: "Total del gasto gubernamental en educación en relación al PIB.",
        purpose: "Medir la inversión pública en educación.",
        importance: "Refleja la prioridad del gobierno en el desarrollo educativo.",
    },
    IndicatorGuideEntry {
        series_name: "General government final consumption expenditure (% of GDP)",
        translated_label: "Gasto de consumo final del gobierno general (% del PIB)",
        definition: "Total del gasto del gobierno en bienes y servicios consumidos por el público en relación al PIB.",
        purpose: "Evaluar el gasto gubernamental en servicios públicos.",
        importance: "Indica la implicación del gobierno en la economía y servicios públicos.",
    },
    IndicatorGuideEntry {
        series_name: "Inflation, GDP deflator (annual %)",
        translated_label: "Inflación, deflactor del PIB (anual %)",
        definition: "Tasa de cambio anual en el deflactor del PIB, que mide la inflación general.",
        purpose: "Medir la inflación basada en el PIB.",
        importance: "Refleja la variación de precios de todos los bienes y servicios producidos.",
    },
    IndicatorGuideEntry {
        series_name: "Gross capital formation (% of GDP)",
        translated_label: "Formación bruta de capital (% del PIB)",
        definition: "Total de inversiones en activos fijos y cambios en inventarios en relación al PIB.",
        purpose: "Medir la inversión en la economía.",
        importance: "Indica el nivel de desarrollo y expansión de la capacidad productiva.",
    },
    IndicatorGuideEntry {
        series_name: "Gross domestic savings (% of GDP)",
        translated_label: "Ahorro interno bruto (% del PIB)",
        definition: "Total de ahorro generado dentro de la economía en relación al PIB.",
        purpose: "Evaluar la capacidad de ahorro nacional.",
        importance: "Refleja la disponibilidad de recursos para inversión futura.",
    },
    IndicatorGuideEntry {
        series_name: "Gross fixed capital formation (% of GDP)",
        translated_label: "Formación bruta de capital fijo (% del PIB)",
        definition: "Inversión en activos fijos en relación al PIB.",
        purpose: "Medir la inversión en infraestructura y equipos.",
        importance: "Indica el crecimiento potencial de la capacidad productiva.",
    },
    IndicatorGuideEntry {
        series_name: "Gross fixed capital formation, private sector (% of GDP)",
        translated_label: "Formación bruta de capital fijo, sector privado (% del PIB)",
        definition: "Inversión en activos fijos por el sector privado en relación al PIB.",
        purpose: "Evaluar la inversión privada en la economía.",
        importance: "Refleja la confianza del sector privado y su contribución al crecimiento.",
    },
    IndicatorGuideEntry {
        series_name: "Gross national expenditure (% of GDP)",
        translated_label: "Gasto nacional bruto (% del PIB)",
        definition: "Total del gasto en bienes y servicios dentro del país en relación al PIB.",
        purpose: "Medir la demanda interna total.",
        importance: "Indica la fortaleza del consumo y la inversión interna.",
    },
    IndicatorGuideEntry {
        series_name: "Gross savings (% of GDP)",
        translated_label: "Ahorro bruto (% del PIB)",
        definition: "Total del ahorro nacional en relación al PIB.",
        purpose: "Evaluar la capacidad de ahorro del país.",
        importance: "Señala los recursos disponibles para inversión y crecimiento económico.",
    },
    IndicatorGuideEntry {
        series_name: "Military expenditure (% of GDP)",
        translated_label: "Gasto militar (% del PIB)",
        definition: "Total del gasto en defensa en relación al PIB.",
        purpose: "Medir la inversión en defensa nacional.",
        importance: "Indica la prioridad del gobierno en seguridad y defensa.",
    },
    IndicatorGuideEntry {
        series_name: "Research and development expenditure (% of GDP)",
        translated_label: "Gasto en investigación y desarrollo (% del PIB)",
        definition: "Total del gasto en I+D en relación al PIB.",
        purpose: "Evaluar la inversión en innovación y tecnología.",
        importance: "Refleja el compromiso con el progreso científico y tecnológico.",
    },
];
